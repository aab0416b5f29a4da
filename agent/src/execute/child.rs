//! Child chain handlers.
//!
//! `WithdrawOnChild` is meant to be called by anyone, including schedulers
//! that do not track the cooldown themselves, so a call inside the window is
//! a successful no-op rather than an error. The ledger slot is written before
//! the withdrawal message is queued.

use cosmwasm_std::{
    to_json_binary, Addr, Api, DepsMut, Env, Event, MessageInfo, Reply, Response, SubMsg, WasmMsg,
};

use common::{
    AssetInfo, BridgeTokenExecuteMsg, FeeProviderExecuteMsg, FeeProviderQueryMsg,
    UnderlyingAssetResponse,
};

use crate::cooldown::{self, Eligibility};
use crate::error::ContractError;
use crate::state::{Config, PendingClaim, CLAIM_REPLY_ID, CONFIG, PENDING_CLAIM};

// ============================================================================
// Execute
// ============================================================================

/// Exit the agent's whole balance of `token` to the root chain, once per window.
pub fn execute_withdraw_on_child(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.mode.require_child()?;
    let token = validate_token(deps.api, &token)?;

    withdraw_on_child(deps, &env, &config, &info.sender, &token)
}

/// Pull accrued fees from `fee_provider`, then withdraw its underlying token.
///
/// The withdrawal runs from the pull's reply so it sees the fees in the
/// agent's balance. A failing pull aborts the whole call with the provider's
/// own error.
pub fn execute_claim_and_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    fee_provider: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.mode.require_child()?;

    if fee_provider.trim().is_empty() {
        return Err(ContractError::InvalidProvider);
    }
    let provider = deps.api.addr_validate(fee_provider.trim())?;

    let underlying: UnderlyingAssetResponse = deps
        .querier
        .query_wasm_smart(&provider, &FeeProviderQueryMsg::UnderlyingAsset {})?;
    let token = validate_token(deps.api, &underlying.asset)?;

    if PENDING_CLAIM.may_load(deps.storage)?.is_some() {
        return Err(ContractError::ReplyInFlight { id: CLAIM_REPLY_ID });
    }
    PENDING_CLAIM.save(
        deps.storage,
        &PendingClaim {
            caller: info.sender.clone(),
            token: token.clone(),
        },
    )?;

    let pull = WasmMsg::Execute {
        contract_addr: provider.to_string(),
        msg: to_json_binary(&FeeProviderExecuteMsg::TransferFees {})?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(pull, CLAIM_REPLY_ID))
        .add_attribute("action", "claim_fees")
        .add_attribute("caller", info.sender)
        .add_attribute("fee_provider", provider)
        .add_attribute("token", token))
}

// ============================================================================
// Reply
// ============================================================================

/// Fees landed; run the gated withdrawal for the provider's underlying token.
pub fn reply_claim(deps: DepsMut, env: Env, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_CLAIM
        .may_load(deps.storage)?
        .ok_or(ContractError::MissingReplyContext { id: reply.id })?;
    PENDING_CLAIM.remove(deps.storage);

    let config = CONFIG.load(deps.storage)?;
    withdraw_on_child(deps, &env, &config, &pending.caller, &pending.token)
}

// ============================================================================
// Helpers
// ============================================================================

fn validate_token(api: &dyn Api, token: &str) -> Result<Addr, ContractError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ContractError::InvalidAsset);
    }
    Ok(api.addr_validate(token)?)
}

fn withdraw_on_child(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    caller: &Addr,
    token: &Addr,
) -> Result<Response, ContractError> {
    let now = env.block.height;

    if let Eligibility::CoolingDown { eligible_at } =
        cooldown::check(deps.storage, token, config.cooldown_window, now)?
    {
        return Ok(Response::new()
            .add_attribute("action", "withdraw_on_child")
            .add_attribute("token", token)
            .add_attribute("skipped", "true")
            .add_attribute("eligible_at", eligible_at.to_string()));
    }

    cooldown::consume(deps.storage, token, now)?;

    let amount = AssetInfo::cw20(token).query_balance(&deps.querier, env.contract.address.clone())?;

    let mut response = Response::new();
    if !amount.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&BridgeTokenExecuteMsg::Withdraw { amount })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_event(
            Event::new("withdraw_on_child")
                .add_attribute("caller", caller)
                .add_attribute("token", token)
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "withdraw_on_child")
        .add_attribute("token", token)
        .add_attribute("skipped", "false")
        .add_attribute("withdraw_tick", now.to_string()))
}
