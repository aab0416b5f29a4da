//! Query handlers for the CL8Y custodial agent.

use cosmwasm_std::{Deps, Env, StdResult};

use crate::cooldown::{self, Eligibility};
use crate::msg::{
    ConfigResponse, LastWithdrawTickResponse, NextWithdrawTickResponse, PendingAuthorityResponse,
};
use crate::state::{CONFIG, PENDING_AUTHORITY};

/// Query agent configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        mode: config.mode.chain_mode(),
        bridge_endpoint: config.mode.bridge_endpoint().cloned(),
        cooldown_window: config.cooldown_window,
        authority: config.authority,
    })
}

/// Query the height of the last child withdrawal of `token`.
pub fn query_last_withdraw_tick(deps: Deps, token: String) -> StdResult<LastWithdrawTickResponse> {
    let token = deps.api.addr_validate(&token)?;
    let last_withdraw_tick = cooldown::last_withdraw(deps.storage, &token)?;
    Ok(LastWithdrawTickResponse {
        token,
        last_withdraw_tick,
    })
}

/// Query when `token` can next be withdrawn on the child chain.
pub fn query_next_withdraw_tick(
    deps: Deps,
    env: Env,
    token: String,
) -> StdResult<NextWithdrawTickResponse> {
    let token = deps.api.addr_validate(&token)?;
    let config = CONFIG.load(deps.storage)?;
    let last = cooldown::last_withdraw(deps.storage, &token)?;

    let eligible_at = cooldown::eligible_at(last, config.cooldown_window).unwrap_or(0);
    let eligible_now = cooldown::eligibility(last, config.cooldown_window, env.block.height)
        == Eligibility::Eligible;

    Ok(NextWithdrawTickResponse {
        token,
        eligible_at,
        eligible_now,
    })
}

/// Query the pending authority proposal, if any.
pub fn query_pending_authority(deps: Deps) -> StdResult<Option<PendingAuthorityResponse>> {
    let pending = PENDING_AUTHORITY.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAuthorityResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}
