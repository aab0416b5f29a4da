//! Message shapes of the external contracts the agent calls.
//!
//! The agent only ever builds these messages or parses these responses; the
//! contracts behind them are deployed and operated independently.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

/// Execute interface of a child-chain bridge token.
///
/// Besides this message the token must answer the standard CW20
/// `Balance { address }` query.
#[cw_serde]
pub enum BridgeTokenExecuteMsg {
    /// Burn `amount` from the caller and start the exit to the root chain
    Withdraw { amount: Uint128 },
}

/// Execute interface of a fee-accruing provider.
#[cw_serde]
pub enum FeeProviderExecuteMsg {
    /// Pay all accrued fees to the caller in the underlying asset
    TransferFees {},
}

/// Query interface of a fee-accruing provider.
#[cw_serde]
#[derive(QueryResponses)]
pub enum FeeProviderQueryMsg {
    /// Token contract the provider pays its fees in
    #[returns(UnderlyingAssetResponse)]
    UnderlyingAsset {},
}

#[cw_serde]
pub struct UnderlyingAssetResponse {
    pub asset: String,
}
