//! Asset identifiers and the value-transfer primitive.
//!
//! Covers both asset kinds available on TerraClassic: bank denoms and CW20
//! token contracts. Every read goes through the querier and every transfer is
//! returned as a message, so callers decide where it lands in their response.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, BankMsg, Coin, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

#[cw_serde]
pub enum AssetInfo {
    /// Bank denom (e.g. "uluna")
    Native { denom: String },
    /// CW20 token contract address
    Cw20 { contract_addr: String },
}

impl AssetInfo {
    pub fn native(denom: impl Into<String>) -> Self {
        AssetInfo::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract_addr: impl Into<String>) -> Self {
        AssetInfo::Cw20 {
            contract_addr: contract_addr.into(),
        }
    }

    /// The raw identifier: denom or contract address.
    pub fn id(&self) -> &str {
        match self {
            AssetInfo::Native { denom } => denom,
            AssetInfo::Cw20 { contract_addr } => contract_addr,
        }
    }

    /// True for the null identifier (empty or whitespace-only).
    pub fn is_empty(&self) -> bool {
        self.id().trim().is_empty()
    }

    /// Balance of `account` in this asset.
    pub fn query_balance(
        &self,
        querier: &QuerierWrapper,
        account: impl Into<String>,
    ) -> StdResult<Uint128> {
        match self {
            AssetInfo::Native { denom } => {
                Ok(querier.query_balance(account, denom.clone())?.amount)
            }
            AssetInfo::Cw20 { contract_addr } => {
                let res: BalanceResponse = querier.query_wasm_smart(
                    contract_addr.clone(),
                    &Cw20QueryMsg::Balance {
                        address: account.into(),
                    },
                )?;
                Ok(res.balance)
            }
        }
    }

    /// Message sending `amount` of this asset from the calling contract to `recipient`.
    pub fn transfer_msg(&self, recipient: impl Into<String>, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.into(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.into(),
                    amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }
}

impl fmt::Display for AssetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
