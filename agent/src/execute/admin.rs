//! Authority-gated handlers.
//!
//! This module handles:
//! - Cooldown window configuration (child only)
//! - Authority handover: the authority proposes, the successor accepts once
//!   the timelock has passed, the authority may withdraw the proposal

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{PendingAuthority, AUTHORITY_TIMELOCK_DURATION, CONFIG, PENDING_AUTHORITY};

// ============================================================================
// Cooldown Configuration
// ============================================================================

/// Replace the cooldown window. No bounds: 0 turns the cooldown off.
pub fn execute_set_cooldown_window(
    deps: DepsMut,
    info: MessageInfo,
    window: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    config.mode.require_child()?;
    config.ensure_authority(&info.sender)?;

    let previous = std::mem::replace(&mut config.cooldown_window, window);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_cooldown_window")
        .add_attribute("previous_window", previous.to_string())
        .add_attribute("window", window.to_string()))
}

// ============================================================================
// Authority Handover
// ============================================================================

/// Nominate a successor. Replaces any earlier proposal and restarts the timelock.
pub fn execute_propose_authority(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_authority: String,
) -> Result<Response, ContractError> {
    CONFIG.load(deps.storage)?.ensure_authority(&info.sender)?;

    let proposal = PendingAuthority {
        new_address: deps.api.addr_validate(&new_authority)?,
        execute_after: env.block.time.plus_seconds(AUTHORITY_TIMELOCK_DURATION),
    };
    PENDING_AUTHORITY.save(deps.storage, &proposal)?;

    Ok(Response::new()
        .add_attribute("action", "propose_authority")
        .add_attribute("new_authority", proposal.new_address)
        .add_attribute("execute_after", proposal.execute_after.seconds().to_string()))
}

/// Successor takes over once the timelock has passed.
pub fn execute_accept_authority(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let proposal = PENDING_AUTHORITY
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingAuthority)?;

    if info.sender != proposal.new_address {
        return Err(ContractError::NotPendingAuthority);
    }
    if env.block.time < proposal.execute_after {
        return Err(ContractError::TimelockNotExpired {
            remaining_seconds: proposal.execute_after.seconds() - env.block.time.seconds(),
        });
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous = std::mem::replace(&mut config.authority, info.sender);
    CONFIG.save(deps.storage, &config)?;
    PENDING_AUTHORITY.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_authority")
        .add_attribute("previous_authority", previous)
        .add_attribute("new_authority", config.authority))
}

/// Withdraw the current proposal, if any.
pub fn execute_cancel_authority_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    CONFIG.load(deps.storage)?.ensure_authority(&info.sender)?;
    PENDING_AUTHORITY.remove(deps.storage);

    Ok(Response::new().add_attribute("action", "cancel_authority_proposal"))
}
