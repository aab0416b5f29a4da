//! CL8Y Custodial Agent - Root/Child Withdrawal Coordination for TerraClassic
//!
//! The agent holds tokens on behalf of a single authority and moves them
//! between two linked chains. Its mode is fixed at instantiation:
//!
//! # Root Mode (bridge endpoint configured)
//! 1. Anyone forwards an exit payload to the bridge endpoint (`ForwardBridgeCall`)
//! 2. Released tokens are swept to the authority (`SweepToAuthority`)
//! 3. Both steps can run as one atomic call (`WithdrawAndSweep`)
//!
//! # Child Mode (no bridge endpoint)
//! 1. Anyone triggers `WithdrawOnChild` for a bridge token
//! 2. The whole balance exits to the root chain, at most once per cooldown window
//! 3. `ClaimAndWithdraw` pulls accrued fees from a provider first
//!
//! # Security
//! - Mode guard on every operation
//! - Per-token cooldown ledger, committed before any outbound message
//! - Single authority with timelocked two-step handover

pub mod contract;
pub mod cooldown;
pub mod error;
mod execute;
pub mod mode;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
pub use crate::mode::{ChainMode, Mode};
