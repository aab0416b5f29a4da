//! Common - Shared Types and Collaborator Interfaces for the CL8Y Custodial Agent
//!
//! This package provides the asset abstraction used for balance reads and
//! transfers, plus the message shapes of the external contracts the agent
//! talks to (bridge token on the child chain, fee provider).

pub mod asset;
pub mod interfaces;

pub use asset::AssetInfo;
pub use interfaces::{
    BridgeTokenExecuteMsg, FeeProviderExecuteMsg, FeeProviderQueryMsg, UnderlyingAssetResponse,
};
