//! Message types for the CL8Y custodial agent.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

use crate::mode::ChainMode;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Minimum number of blocks between two withdrawals of the same token.
    /// Stored in both modes, only enforced on the child chain.
    pub cooldown_window: u64,
    /// Root chain bridge manager. Present selects root mode, absent or empty selects child mode.
    pub bridge_endpoint: Option<String>,
    /// Initial authority (defaults to the instantiating sender)
    pub authority: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Root Chain Operations
    // ========================================================================
    /// Forward an opaque exit payload to the bridge endpoint
    ///
    /// Authorization: Anyone
    ///
    /// The payload is passed through untouched as the endpoint's execute
    /// message. The endpoint's response data is returned as this call's data;
    /// its error is surfaced verbatim inside `BridgeCallFailed`.
    ForwardBridgeCall { payload: Binary },

    /// Send the agent's whole balance of `asset` to the authority
    ///
    /// Authorization: Anyone
    SweepToAuthority { asset: AssetInfo },

    /// `ForwardBridgeCall` followed by `SweepToAuthority`, all-or-nothing
    ///
    /// Authorization: Anyone
    WithdrawAndSweep { payload: Binary, asset: AssetInfo },

    // ========================================================================
    // Child Chain Operations
    // ========================================================================
    /// Exit the agent's whole balance of a bridge token to the root chain
    ///
    /// Authorization: Anyone
    ///
    /// Succeeds without doing anything while the token is cooling down.
    WithdrawOnChild { token: String },

    /// Pull accrued fees from a provider, then `WithdrawOnChild` its underlying token
    ///
    /// Authorization: Anyone
    ClaimAndWithdraw { fee_provider: String },

    /// Replace the cooldown window (0 disables it)
    ///
    /// Authorization: Authority only
    SetCooldownWindow { window: u64 },

    // ========================================================================
    // Authority Management
    // ========================================================================
    /// Propose a new authority (starts 7-day timelock)
    ProposeAuthority { new_authority: String },

    /// Accept the authority role (pending authority, after timelock)
    AcceptAuthority {},

    /// Cancel a pending authority proposal
    CancelAuthorityProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Mode, bridge endpoint, cooldown window and authority
    #[returns(ConfigResponse)]
    Config {},

    /// Height of the last child withdrawal of a token
    #[returns(LastWithdrawTickResponse)]
    LastWithdrawTick { token: String },

    /// First height at which the next child withdrawal of a token proceeds
    #[returns(NextWithdrawTickResponse)]
    NextWithdrawTick { token: String },

    #[returns(Option<PendingAuthorityResponse>)]
    PendingAuthority {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub mode: ChainMode,
    pub bridge_endpoint: Option<Addr>,
    pub cooldown_window: u64,
    pub authority: Addr,
}

#[cw_serde]
pub struct LastWithdrawTickResponse {
    pub token: Addr,
    /// `None` if the token was never withdrawn
    pub last_withdraw_tick: Option<u64>,
}

#[cw_serde]
pub struct NextWithdrawTickResponse {
    pub token: Addr,
    /// 0 if the token was never withdrawn
    pub eligible_at: u64,
    /// Whether a withdrawal in the current block would proceed
    pub eligible_now: bool,
}

#[cw_serde]
pub struct PendingAuthorityResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}
