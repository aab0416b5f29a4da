//! State definitions for the CL8Y custodial agent.
//!
//! The cooldown ledger lives in [`crate::cooldown`]; everything else the agent
//! persists is declared here.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::Item;

use common::AssetInfo;

use crate::error::ContractError;
use crate::mode::Mode;

pub const CONTRACT_NAME: &str = "crates.io:cl8y-custodial-agent";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Authority handover timelock (7 days)
pub const AUTHORITY_TIMELOCK_DURATION: u64 = 604_800;

/// Reply id for the bridge endpoint forward (with or without a sweep)
pub const FORWARD_REPLY_ID: u64 = 1;
/// Reply id for the fee provider pull in `ClaimAndWithdraw`
pub const CLAIM_REPLY_ID: u64 = 2;

// ============================================================================
// Core Configuration
// ============================================================================

/// Agent configuration, written once at instantiation
#[cw_serde]
pub struct Config {
    /// Root or child behaviour; never changes after instantiation
    pub mode: Mode,
    /// Minimum block spacing between two withdrawals of the same token (child only)
    pub cooldown_window: u64,
    /// Sole owner of the agent and recipient of sweeps
    pub authority: Addr,
}

impl Config {
    pub fn is_authority(&self, caller: &Addr) -> bool {
        &self.authority == caller
    }

    /// Fails with `NotAuthority` unless `caller` is the current authority.
    pub fn ensure_authority(&self, caller: &Addr) -> Result<(), ContractError> {
        if self.is_authority(caller) {
            Ok(())
        } else {
            Err(ContractError::NotAuthority)
        }
    }
}

/// Pending authority change proposal
#[cw_serde]
pub struct PendingAuthority {
    /// Proposed new authority
    pub new_address: Addr,
    /// Block time when the change can be accepted
    pub execute_after: Timestamp,
}

// ============================================================================
// Reply Context
// ============================================================================

/// Context of a bridge forward awaiting its reply
#[cw_serde]
pub struct PendingForward {
    pub caller: Addr,
    /// Asset to sweep to the authority once the forward succeeds
    pub sweep: Option<AssetInfo>,
}

/// Context of a fee pull awaiting its reply
#[cw_serde]
pub struct PendingClaim {
    pub caller: Addr,
    /// Underlying bridge token reported by the fee provider
    pub token: Addr,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const PENDING_AUTHORITY: Item<PendingAuthority> = Item::new("pending_authority");

/// Only populated between an execute and its reply within one transaction.
/// Each is a single slot: a forward or claim started while the same kind is
/// already in flight (a collaborator calling back into the agent) is rejected
/// with `ReplyInFlight`.
pub const PENDING_FORWARD: Item<PendingForward> = Item::new("pending_forward");
pub const PENDING_CLAIM: Item<PendingClaim> = Item::new("pending_claim");
