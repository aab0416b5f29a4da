//! Cooldown ledger.
//!
//! Tracks, per bridge token, the block height of the last child-side
//! withdrawal. A token with no entry has never been withdrawn and is always
//! eligible. Callers must [`consume`] the slot before queueing the transfer.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

/// token contract => block height of the last initiated withdrawal
pub const LAST_WITHDRAW: Map<&Addr, u64> = Map::new("last_withdraw");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    CoolingDown { eligible_at: u64 },
}

/// First height at which a withdrawal may run again. `None` if never withdrawn.
pub fn eligible_at(last: Option<u64>, window: u64) -> Option<u64> {
    last.map(|last| last.saturating_add(window))
}

/// Skips only while `now < last + window`; the boundary height itself proceeds.
pub fn eligibility(last: Option<u64>, window: u64, now: u64) -> Eligibility {
    match eligible_at(last, window) {
        Some(eligible_at) if now < eligible_at => Eligibility::CoolingDown { eligible_at },
        _ => Eligibility::Eligible,
    }
}

pub fn last_withdraw(storage: &dyn Storage, token: &Addr) -> StdResult<Option<u64>> {
    LAST_WITHDRAW.may_load(storage, token)
}

pub fn check(storage: &dyn Storage, token: &Addr, window: u64, now: u64) -> StdResult<Eligibility> {
    Ok(eligibility(last_withdraw(storage, token)?, window, now))
}

/// Record `now` as the latest withdrawal of `token`. Never moves backwards.
pub fn consume(storage: &mut dyn Storage, token: &Addr, now: u64) -> StdResult<()> {
    LAST_WITHDRAW.update(storage, token, |last| -> StdResult<u64> {
        Ok(last.map_or(now, |last| last.max(now)))
    })?;
    Ok(())
}
