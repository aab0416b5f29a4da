//! Root chain handlers.
//!
//! The forward to the bridge endpoint is dispatched as a submessage that
//! replies on success only. A failing endpoint aborts the transaction with its
//! own error, untouched by the reply machinery (wasmd redacts errors handed to
//! a reply). A successful one is followed by the sweep in the same transaction.

use cosmwasm_std::{
    Addr, Api, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo, Reply, Response,
    StdResult, Storage, SubMsg, SubMsgResult, WasmMsg,
};
use cw_utils::parse_execute_response_data;

use common::AssetInfo;

use crate::error::ContractError;
use crate::state::{PendingForward, CONFIG, FORWARD_REPLY_ID, PENDING_FORWARD};

// ============================================================================
// Execute
// ============================================================================

/// Forward an exit payload to the bridge endpoint.
pub fn execute_forward_bridge_call(
    deps: DepsMut,
    info: MessageInfo,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let endpoint = config.mode.require_root()?.clone();

    begin_forward(
        deps.storage,
        PendingForward {
            caller: info.sender.clone(),
            sweep: None,
        },
    )?;

    Ok(Response::new()
        .add_submessage(forward_submsg(&endpoint, payload))
        .add_attribute("action", "forward_bridge_call")
        .add_attribute("caller", info.sender)
        .add_attribute("bridge_endpoint", endpoint))
}

/// Send the agent's whole balance of `asset` to the authority.
pub fn execute_sweep_to_authority(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    config.mode.require_root()?;
    let asset = validate_asset(deps.api, asset)?;

    let (transfer, event) = sweep(deps.as_ref(), &env, &config.authority, &info.sender, &asset)?;

    Ok(Response::new()
        .add_messages(transfer)
        .add_event(event)
        .add_attribute("action", "sweep_to_authority")
        .add_attribute("asset", asset.to_string()))
}

/// Forward then sweep. The sweep runs from the forward's reply, after the
/// endpoint has released funds, and reverts the forward if it fails.
pub fn execute_withdraw_and_sweep(
    deps: DepsMut,
    info: MessageInfo,
    payload: Binary,
    asset: AssetInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let endpoint = config.mode.require_root()?.clone();
    let asset = validate_asset(deps.api, asset)?;

    begin_forward(
        deps.storage,
        PendingForward {
            caller: info.sender.clone(),
            sweep: Some(asset.clone()),
        },
    )?;

    Ok(Response::new()
        .add_submessage(forward_submsg(&endpoint, payload))
        .add_attribute("action", "withdraw_and_sweep")
        .add_attribute("caller", info.sender)
        .add_attribute("bridge_endpoint", endpoint)
        .add_attribute("asset", asset.to_string()))
}

// ============================================================================
// Reply
// ============================================================================

/// Handle the bridge endpoint's result.
///
/// The endpoint's own response bytes, unwrapped from the wasm module's
/// `MsgExecuteContractResponse`, become this call's data. An error result only
/// reaches here if the submessage is ever switched to reply on error; it is
/// relayed as-is inside `BridgeCallFailed`.
pub fn reply_forward(deps: DepsMut, env: Env, reply: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_FORWARD
        .may_load(deps.storage)?
        .ok_or(ContractError::MissingReplyContext { id: reply.id })?;
    PENDING_FORWARD.remove(deps.storage);

    let data = match reply.result {
        SubMsgResult::Err(reason) => return Err(ContractError::BridgeCallFailed { reason }),
        SubMsgResult::Ok(res) => res.data,
    };

    let mut response = Response::new()
        .add_event(Event::new("withdraw_on_root").add_attribute("caller", &pending.caller));

    if let Some(asset) = pending.sweep {
        let config = CONFIG.load(deps.storage)?;
        let (transfer, event) =
            sweep(deps.as_ref(), &env, &config.authority, &pending.caller, &asset)?;
        response = response.add_messages(transfer).add_event(event);
    }

    if let Some(data) = data {
        if let Some(raw) = parse_execute_response_data(&data)?.data {
            response = response.set_data(raw);
        }
    }

    Ok(response)
}

// ============================================================================
// Helpers
// ============================================================================

/// Claim the single forward slot. A forward triggered from inside another
/// forward (the endpoint calling back into the agent) is rejected.
fn begin_forward(storage: &mut dyn Storage, pending: PendingForward) -> Result<(), ContractError> {
    if PENDING_FORWARD.may_load(storage)?.is_some() {
        return Err(ContractError::ReplyInFlight {
            id: FORWARD_REPLY_ID,
        });
    }
    PENDING_FORWARD.save(storage, &pending)?;
    Ok(())
}

fn forward_submsg(endpoint: &Addr, payload: Binary) -> SubMsg {
    SubMsg::reply_on_success(
        WasmMsg::Execute {
            contract_addr: endpoint.to_string(),
            msg: payload,
            funds: vec![],
        },
        FORWARD_REPLY_ID,
    )
}

/// Reject the null identifier and normalize CW20 addresses.
fn validate_asset(api: &dyn Api, asset: AssetInfo) -> Result<AssetInfo, ContractError> {
    if asset.is_empty() {
        return Err(ContractError::InvalidAsset);
    }
    match asset {
        AssetInfo::Cw20 { contract_addr } => Ok(AssetInfo::Cw20 {
            contract_addr: api.addr_validate(contract_addr.trim())?.to_string(),
        }),
        native => Ok(native),
    }
}

/// Build the transfer of the agent's full balance to the authority.
///
/// A zero balance produces no message (bank and CW20 both reject zero-amount
/// sends) but still yields the audit event.
fn sweep(
    deps: Deps,
    env: &Env,
    authority: &Addr,
    caller: &Addr,
    asset: &AssetInfo,
) -> StdResult<(Option<CosmosMsg>, Event)> {
    let amount = asset.query_balance(&deps.querier, env.contract.address.clone())?;

    let transfer = if amount.is_zero() {
        None
    } else {
        Some(asset.transfer_msg(authority, amount)?)
    };

    let event = Event::new("transfer_to_owner")
        .add_attribute("caller", caller)
        .add_attribute("owner", authority)
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount);

    Ok((transfer, event))
}
