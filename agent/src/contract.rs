//! CL8Y Custodial Agent - Entry Points
//!
//! The implementation is modularized into:
//! - `mode` - Root/child guard
//! - `cooldown` - Per-token withdrawal ledger
//! - `execute/` - Execute and reply handlers
//! - `query` - Query handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_authority, execute_cancel_authority_proposal, execute_claim_and_withdraw,
    execute_forward_bridge_call, execute_propose_authority, execute_set_cooldown_window,
    execute_sweep_to_authority, execute_withdraw_and_sweep, execute_withdraw_on_child,
    reply_claim, reply_forward,
};
use crate::mode::Mode;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_last_withdraw_tick, query_next_withdraw_tick, query_pending_authority,
};
use crate::state::{
    Config, CLAIM_REPLY_ID, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FORWARD_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let mode = Mode::from_endpoint(deps.api, msg.bridge_endpoint.as_deref())?;
    let authority = match msg.authority {
        Some(authority) => deps.api.addr_validate(&authority)?,
        None => info.sender,
    };

    let config = Config {
        mode,
        cooldown_window: msg.cooldown_window,
        authority,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("mode", config.mode.chain_mode().to_string())
        .add_attribute(
            "bridge_endpoint",
            config
                .mode
                .bridge_endpoint()
                .map(|e| e.to_string())
                .unwrap_or_default(),
        )
        .add_attribute("cooldown_window", config.cooldown_window.to_string())
        .add_attribute("authority", config.authority))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Root chain
        ExecuteMsg::ForwardBridgeCall { payload } => {
            execute_forward_bridge_call(deps, info, payload)
        }
        ExecuteMsg::SweepToAuthority { asset } => {
            execute_sweep_to_authority(deps, env, info, asset)
        }
        ExecuteMsg::WithdrawAndSweep { payload, asset } => {
            execute_withdraw_and_sweep(deps, info, payload, asset)
        }

        // Child chain
        ExecuteMsg::WithdrawOnChild { token } => execute_withdraw_on_child(deps, env, info, token),
        ExecuteMsg::ClaimAndWithdraw { fee_provider } => {
            execute_claim_and_withdraw(deps, info, fee_provider)
        }
        ExecuteMsg::SetCooldownWindow { window } => {
            execute_set_cooldown_window(deps, info, window)
        }

        // Authority
        ExecuteMsg::ProposeAuthority { new_authority } => {
            execute_propose_authority(deps, env, info, new_authority)
        }
        ExecuteMsg::AcceptAuthority {} => execute_accept_authority(deps, env, info),
        ExecuteMsg::CancelAuthorityProposal {} => execute_cancel_authority_proposal(deps, info),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        FORWARD_REPLY_ID => reply_forward(deps, env, msg),
        CLAIM_REPLY_ID => reply_claim(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LastWithdrawTick { token } => {
            to_json_binary(&query_last_withdraw_tick(deps, token)?)
        }
        QueryMsg::NextWithdrawTick { token } => {
            to_json_binary(&query_next_withdraw_tick(deps, env, token)?)
        }
        QueryMsg::PendingAuthority {} => to_json_binary(&query_pending_authority(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Mode and bridge endpoint are carried over untouched.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = CONFIG.load(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION)
        .add_attribute("mode", config.mode.chain_mode().to_string()))
}
