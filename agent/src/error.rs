//! Error types for the CL8Y custodial agent.

use cosmwasm_std::StdError;
use cw_utils::ParseReplyError;
use thiserror::Error;

use crate::mode::ChainMode;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    ParseReply(#[from] ParseReplyError),

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Agent already initialized")]
    AlreadyInitialized,

    #[error("Wrong chain mode: operation requires {required}, agent is {actual}")]
    WrongChainMode {
        required: ChainMode,
        actual: ChainMode,
    },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only the authority can perform this action")]
    NotAuthority,

    #[error("Unauthorized: only the pending authority can accept")]
    NotPendingAuthority,

    #[error("No pending authority change")]
    NoPendingAuthority,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Input Errors
    // ========================================================================

    #[error("Invalid asset: identifier must not be empty")]
    InvalidAsset,

    #[error("Invalid fee provider: address must not be empty")]
    InvalidProvider,

    // ========================================================================
    // Collaborator Errors
    // ========================================================================

    /// Carries the bridge endpoint's failure text exactly as received.
    #[error("Bridge call failed: {reason}")]
    BridgeCallFailed { reason: String },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Reply context missing for reply id {id}")]
    MissingReplyContext { id: u64 },

    #[error("Re-entrant call: reply {id} already in flight")]
    ReplyInFlight { id: u64 },
}
