//! Mock collaborator contracts for the agent integration tests.
//!
//! - `bridge_endpoint` - root chain bridge manager; executes exit payloads
//! - `bridge_token` - child chain token with CW20 balances and `Withdraw`
//! - `fee_provider` - pays accrued fees in a bridge token
//! - `frozen_token` - reports a balance but rejects every transfer

#![allow(dead_code)]

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::{Item, Map};

use common::{BridgeTokenExecuteMsg, UnderlyingAssetResponse};

pub fn contract_agent() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        custodial_agent::contract::execute,
        custodial_agent::contract::instantiate,
        custodial_agent::contract::query,
    )
    .with_reply(custodial_agent::contract::reply);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

/// Pull a wasm attribute out of a response, looking in every event.
pub fn attr(events: &[cosmwasm_std::Event], key: &str) -> Option<String> {
    events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn has_event(events: &[cosmwasm_std::Event], ty: &str) -> bool {
    events.iter().any(|e| e.ty == ty)
}

// ============================================================================
// Bridge Endpoint (root chain)
// ============================================================================

pub mod bridge_endpoint {
    use super::*;

    pub const EXIT_RESPONSE: &[u8] = b"exit-processed";
    pub const INVALID_PROOF: &str = "RootChainManager: INVALID_PROOF";

    const EXITS: Item<u64> = Item::new("exits");

    #[cw_serde]
    pub struct Payout {
        pub token: String,
        pub amount: Uint128,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        /// Process an exit. A proof of "0xbad" is rejected.
        Exit {
            proof: String,
            payout: Option<Payout>,
        },
    }

    #[cw_serde]
    pub enum QueryMsg {
        Exits {},
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Empty,
    ) -> StdResult<Response> {
        EXITS.save(deps.storage, &0)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::Exit { proof, payout } => {
                if proof == "0xbad" {
                    return Err(StdError::generic_err(INVALID_PROOF));
                }
                EXITS.update(deps.storage, |n| -> StdResult<u64> { Ok(n + 1) })?;

                let mut res = Response::new().set_data(Binary::from(EXIT_RESPONSE));
                if let Some(payout) = payout {
                    res = res.add_message(WasmMsg::Execute {
                        contract_addr: payout.token,
                        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                            recipient: info.sender.to_string(),
                            amount: payout.amount,
                        })?,
                        funds: vec![],
                    });
                }
                Ok(res)
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Exits {} => to_json_binary(&EXITS.load(deps.storage)?),
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }

    pub fn exit_payload(proof: &str, payout: Option<(&Addr, u128)>) -> Binary {
        to_json_binary(&ExecuteMsg::Exit {
            proof: proof.to_string(),
            payout: payout.map(|(token, amount)| Payout {
                token: token.to_string(),
                amount: Uint128::new(amount),
            }),
        })
        .unwrap()
    }
}

// ============================================================================
// Bridge Token (child chain)
// ============================================================================

pub mod bridge_token {
    use super::*;

    pub const FROZEN_ERR: &str = "ChildToken: withdrawals frozen";

    const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
    const WITHDRAWN: Map<&Addr, Uint128> = Map::new("withdrawn");
    const FROZEN: Item<bool> = Item::new("frozen");

    #[cw_serde]
    pub enum ExecuteMsg {
        Mint { recipient: String, amount: Uint128 },
        Withdraw { amount: Uint128 },
        Freeze {},
    }

    #[cw_serde]
    pub enum QueryMsg {
        Balance { address: String },
        Withdrawn { address: String },
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Empty,
    ) -> StdResult<Response> {
        FROZEN.save(deps.storage, &false)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::Mint { recipient, amount } => {
                let recipient = deps.api.addr_validate(&recipient)?;
                BALANCES.update(deps.storage, &recipient, |b| -> StdResult<_> {
                    Ok(b.unwrap_or_default() + amount)
                })?;
                Ok(Response::new())
            }
            ExecuteMsg::Withdraw { amount } => {
                if FROZEN.load(deps.storage)? {
                    return Err(StdError::generic_err(FROZEN_ERR));
                }
                let balance = BALANCES
                    .may_load(deps.storage, &info.sender)?
                    .unwrap_or_default();
                let remaining = balance.checked_sub(amount)?;
                BALANCES.save(deps.storage, &info.sender, &remaining)?;
                WITHDRAWN.update(deps.storage, &info.sender, |w| -> StdResult<_> {
                    Ok(w.unwrap_or_default() + amount)
                })?;
                Ok(Response::new().add_attribute("action", "withdraw"))
            }
            ExecuteMsg::Freeze {} => {
                FROZEN.save(deps.storage, &true)?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Balance { address } => {
                let address = deps.api.addr_validate(&address)?;
                let balance = BALANCES.may_load(deps.storage, &address)?.unwrap_or_default();
                to_json_binary(&BalanceResponse { balance })
            }
            QueryMsg::Withdrawn { address } => {
                let address = deps.api.addr_validate(&address)?;
                to_json_binary(&WITHDRAWN.may_load(deps.storage, &address)?.unwrap_or_default())
            }
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }

    /// The agent only knows the common interface; make sure the mock speaks it.
    pub fn withdraw_msg_is_compatible(amount: Uint128) -> ExecuteMsg {
        let bytes = to_json_binary(&BridgeTokenExecuteMsg::Withdraw { amount }).unwrap();
        cosmwasm_std::from_json(bytes).unwrap()
    }
}

// ============================================================================
// Fee Provider (child chain)
// ============================================================================

pub mod fee_provider {
    use super::*;

    pub const PAUSED_ERR: &str = "FeeProvider: fee transfer paused";

    const TOKEN: Item<Addr> = Item::new("token");
    const ACCRUED: Item<Uint128> = Item::new("accrued");
    const PAUSED: Item<bool> = Item::new("paused");

    #[cw_serde]
    pub struct InstantiateMsg {
        pub token: String,
        pub accrued: Uint128,
        pub paused: bool,
    }

    #[cw_serde]
    pub enum ExecuteMsg {
        TransferFees {},
        Accrue { amount: Uint128 },
    }

    #[cw_serde]
    pub enum QueryMsg {
        UnderlyingAsset {},
    }

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: InstantiateMsg,
    ) -> StdResult<Response> {
        TOKEN.save(deps.storage, &deps.api.addr_validate(&msg.token)?)?;
        ACCRUED.save(deps.storage, &msg.accrued)?;
        PAUSED.save(deps.storage, &msg.paused)?;
        Ok(Response::new())
    }

    pub fn execute(
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> StdResult<Response> {
        match msg {
            ExecuteMsg::TransferFees {} => {
                if PAUSED.load(deps.storage)? {
                    return Err(StdError::generic_err(PAUSED_ERR));
                }
                let accrued = ACCRUED.load(deps.storage)?;
                ACCRUED.save(deps.storage, &Uint128::zero())?;
                let token = TOKEN.load(deps.storage)?;
                Ok(Response::new().add_message(WasmMsg::Execute {
                    contract_addr: token.to_string(),
                    msg: to_json_binary(&bridge_token::ExecuteMsg::Mint {
                        recipient: info.sender.to_string(),
                        amount: accrued,
                    })?,
                    funds: vec![],
                }))
            }
            ExecuteMsg::Accrue { amount } => {
                ACCRUED.update(deps.storage, |a| -> StdResult<_> { Ok(a + amount) })?;
                Ok(Response::new())
            }
        }
    }

    pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::UnderlyingAsset {} => to_json_binary(&UnderlyingAssetResponse {
                asset: TOKEN.load(deps.storage)?.to_string(),
            }),
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }
}

// ============================================================================
// Frozen Token (root chain)
// ============================================================================

pub mod frozen_token {
    use super::*;

    pub const FROZEN_ERR: &str = "FrozenToken: transfers disabled";

    #[cw_serde]
    pub enum QueryMsg {
        Balance { address: String },
    }

    pub fn instantiate(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Empty,
    ) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn execute(
        _deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        _msg: Cw20ExecuteMsg,
    ) -> StdResult<Response> {
        Err(StdError::generic_err(FROZEN_ERR))
    }

    pub fn query(_deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Balance { .. } => to_json_binary(&BalanceResponse {
                balance: Uint128::new(1_000),
            }),
        }
    }

    pub fn contract() -> Box<dyn Contract<Empty>> {
        Box::new(ContractWrapper::new(execute, instantiate, query))
    }
}
