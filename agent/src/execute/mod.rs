//! Execute handlers for the CL8Y custodial agent.
//!
//! This module contains all execute and reply handlers, organized by chain side:
//! - `root` - Bridge forwarding, sweep to authority, withdraw-and-sweep
//! - `child` - Cooldown-gated withdrawal and claim-then-withdraw
//! - `admin` - Cooldown configuration and authority transfer

mod admin;
mod child;
mod root;

pub use admin::*;
pub use child::*;
pub use root::*;
