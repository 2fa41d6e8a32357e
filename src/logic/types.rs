use crate::graph::SwapRoute;
use crate::pool::PoolSide;
use bigdecimal::BigDecimal;
use serde::Serialize;
use strum_macros::Display;

/// How a pool's valuation was obtained
#[derive(Clone, Debug, Display, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValuationOutcome {
    /// First coin is the base currency, no routing needed
    BasePaired,
    /// Priced through a route starting at the anchor side's coin
    Routed { anchor: PoolSide, route: SwapRoute },
    /// Neither coin is tracked
    Untracked,
    /// No route to the base currency within the depth limit
    Unpriceable,
}

/// Base-currency valuation of one pool
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PoolValuation {
    pub pool_id: u64,
    /// Pool value in display units of the base currency, never negative
    pub liquidity_bip: BigDecimal,
    pub outcome: ValuationOutcome,
}

impl PoolValuation {
    pub fn new(pool_id: u64, liquidity_bip: BigDecimal, outcome: ValuationOutcome) -> Self {
        Self { pool_id, liquidity_bip, outcome }
    }

    pub fn zero(pool_id: u64, outcome: ValuationOutcome) -> Self {
        Self::new(pool_id, BigDecimal::from(0), outcome)
    }

    /// The pool contributes to aggregate liquidity
    pub fn is_priced(&self) -> bool {
        matches!(self.outcome, ValuationOutcome::BasePaired | ValuationOutcome::Routed { .. })
    }
}
