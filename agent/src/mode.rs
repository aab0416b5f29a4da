//! Mode guard.
//!
//! The agent runs either on the root chain, where it talks to the bridge
//! endpoint, or on the child chain, where it rate-limits exits. The choice is
//! made once from the instantiate message and every operation checks it before
//! touching storage or building messages.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, StdResult};

use crate::error::ContractError;

/// Chain side without payload, used in errors and query responses.
#[cw_serde]
#[derive(Copy, Eq)]
pub enum ChainMode {
    Root,
    Child,
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainMode::Root => f.write_str("root"),
            ChainMode::Child => f.write_str("child"),
        }
    }
}

/// Operating mode. The root variant owns the bridge endpoint, so a root agent
/// without an endpoint cannot be stored.
#[cw_serde]
pub enum Mode {
    Root { bridge_endpoint: Addr },
    Child,
}

impl Mode {
    /// Root if an endpoint is given, child if it is absent or blank.
    pub fn from_endpoint(api: &dyn Api, bridge_endpoint: Option<&str>) -> StdResult<Self> {
        match bridge_endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => Ok(Mode::Root {
                bridge_endpoint: api.addr_validate(endpoint)?,
            }),
            None => Ok(Mode::Child),
        }
    }

    pub fn chain_mode(&self) -> ChainMode {
        match self {
            Mode::Root { .. } => ChainMode::Root,
            Mode::Child => ChainMode::Child,
        }
    }

    pub fn bridge_endpoint(&self) -> Option<&Addr> {
        match self {
            Mode::Root { bridge_endpoint } => Some(bridge_endpoint),
            Mode::Child => None,
        }
    }

    /// Fails with `WrongChainMode` unless this is a root agent.
    pub fn require_root(&self) -> Result<&Addr, ContractError> {
        self.bridge_endpoint()
            .ok_or(ContractError::WrongChainMode {
                required: ChainMode::Root,
                actual: self.chain_mode(),
            })
    }

    /// Fails with `WrongChainMode` unless this is a child agent.
    pub fn require_child(&self) -> Result<(), ContractError> {
        match self {
            Mode::Child => Ok(()),
            Mode::Root { .. } => Err(ContractError::WrongChainMode {
                required: ChainMode::Child,
                actual: ChainMode::Root,
            }),
        }
    }
}
