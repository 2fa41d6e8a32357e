use super::config::ValuationConfigSection;
use super::price_composer::compose_price;
use super::types::{PoolValuation, ValuationOutcome};
use crate::errors::SwapError;
use crate::graph::{CoinGraph, RouteFinder, SwapRoute};
use crate::pool::{LiquidityPool, PoolSide, TrackedCoins};
use crate::utils::amount::{format_bip, volume_in_bip};
use crate::utils::constants::BASE_COIN_ID;
use crate::utils::FastHashMap;
use bigdecimal::BigDecimal;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// LiquidityValuator values pools in base-currency display units.
///
/// Every valuation is a pure function of the pool snapshot and the tracked
/// coin set: the routing graph is rebuilt for each call and dropped with it,
/// so valuations of one snapshot can run on any number of threads.
#[derive(Debug, Clone, Default)]
pub struct LiquidityValuator {
    config: ValuationConfigSection,
}

impl LiquidityValuator {
    pub fn new(config: ValuationConfigSection) -> Self {
        Self { config }
    }

    /// Value of `pool` in base-currency display units, `0` when it is not
    /// tracked or cannot be priced.
    pub fn value_pool(&self, all_pools: &[LiquidityPool], pool: &LiquidityPool, tracked: &TrackedCoins) -> Result<BigDecimal, SwapError> {
        Ok(self.evaluate(all_pools, pool, tracked)?.liquidity_bip)
    }

    /// Same as [`LiquidityValuator::value_pool`] but also reports how the value was obtained.
    pub fn evaluate(&self, all_pools: &[LiquidityPool], pool: &LiquidityPool, tracked: &TrackedCoins) -> Result<PoolValuation, SwapError> {
        let tracked_pools = Self::tracked_pools(all_pools, tracked);
        self.evaluate_with(&tracked_pools, pool, tracked)
    }

    /// Value every pool of a snapshot. Failures are reported per pool and
    /// never abort the rest of the batch.
    pub fn value_pools(&self, all_pools: &[LiquidityPool], tracked: &TrackedCoins) -> Vec<Result<PoolValuation, SwapError>> {
        let tracked_pools = Self::tracked_pools(all_pools, tracked);

        let evaluate_one = |pool: &LiquidityPool| -> Result<PoolValuation, SwapError> {
            let result = self.evaluate_with(&tracked_pools, pool, tracked);
            if let Err(err) = &result {
                warn!(%pool, %err, "Pool valuation failed");
            }
            result
        };

        let results: Vec<Result<PoolValuation, SwapError>> = if self.config.parallel {
            all_pools.par_iter().map(evaluate_one).collect()
        } else {
            all_pools.iter().map(evaluate_one).collect()
        };

        let priced = results.iter().filter(|result| matches!(result, Ok(valuation) if valuation.is_priced())).count();
        info!(pools = all_pools.len(), priced, tracked_pools = tracked_pools.len(), "Valued pool snapshot");

        results
    }

    /// Write successful valuations back into the pool records as `liquidity_bip`.
    /// Returns the number of updated pools.
    pub fn apply_valuations(pools: &mut [LiquidityPool], valuations: &[Result<PoolValuation, SwapError>]) -> usize {
        let by_id: FastHashMap<u64, &PoolValuation> =
            valuations.iter().filter_map(|result| result.as_ref().ok()).map(|valuation| (valuation.pool_id, valuation)).collect();

        let mut updated = 0;
        for pool in pools.iter_mut() {
            if let Some(valuation) = by_id.get(&pool.id) {
                pool.liquidity_bip = format_bip(&valuation.liquidity_bip);
                updated += 1;
            }
        }
        updated
    }

    fn tracked_pools(all_pools: &[LiquidityPool], tracked: &TrackedCoins) -> Vec<LiquidityPool> {
        all_pools.iter().filter(|pool| tracked.tracks_pool(pool)).cloned().collect()
    }

    // `tracked_pools` must already be filtered by `tracked`
    fn evaluate_with(&self, tracked_pools: &[LiquidityPool], pool: &LiquidityPool, tracked: &TrackedCoins) -> Result<PoolValuation, SwapError> {
        if pool.is_base_paired() {
            return self.evaluate_base_paired(pool);
        }
        if !tracked.tracks_pool(pool) {
            return Ok(PoolValuation::zero(pool.id, ValuationOutcome::Untracked));
        }

        self.evaluate_routed(tracked_pools, pool)
    }

    fn liquidity_factor(&self) -> BigDecimal {
        BigDecimal::from(self.config.liquidity_factor)
    }

    fn evaluate_base_paired(&self, pool: &LiquidityPool) -> Result<PoolValuation, SwapError> {
        let liquidity_bip = volume_in_bip(&pool.first_coin_volume)? * self.liquidity_factor();
        Ok(PoolValuation::new(pool.id, liquidity_bip, ValuationOutcome::BasePaired))
    }

    fn evaluate_routed(&self, tracked_pools: &[LiquidityPool], pool: &LiquidityPool) -> Result<PoolValuation, SwapError> {
        let coin_graph = CoinGraph::build(tracked_pools)?;

        let Some((anchor, route)) = self.find_anchor_route(&coin_graph, pool)? else {
            debug!(%pool, "No route to base currency from either side");
            return Ok(PoolValuation::zero(pool.id, ValuationOutcome::Unpriceable));
        };

        let Some(price) = compose_price(&route, tracked_pools)? else {
            return Ok(PoolValuation::zero(pool.id, ValuationOutcome::Unpriceable));
        };

        let liquidity_bip = volume_in_bip(pool.volume(anchor))? * price * self.liquidity_factor();
        debug!(%pool, %anchor, %route, %liquidity_bip, "Valued pool through route");

        Ok(PoolValuation::new(pool.id, liquidity_bip, ValuationOutcome::Routed { anchor, route }))
    }

    /// Route the first coin to the base currency, falling back to the second
    /// coin. Only `RouteNotFound` triggers the fallback.
    fn find_anchor_route(&self, coin_graph: &CoinGraph, pool: &LiquidityPool) -> Result<Option<(PoolSide, SwapRoute)>, SwapError> {
        let route_finder = RouteFinder::new(self.config.max_depth, self.config.top_k);

        for side in PoolSide::BOTH {
            match route_finder.find_routes(coin_graph, pool.coin_id(side), BASE_COIN_ID) {
                Ok(routes) => {
                    if let Some(route) = routes.into_iter().next() {
                        return Ok(Some((side, route)));
                    }
                }
                Err(err) if err.is_route_not_found() => {
                    debug!(%pool, %side, %err, "Side has no route to base currency");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(None)
    }
}

/// Value one pool with the default configuration.
pub fn value_pool(all_pools: &[LiquidityPool], pool: &LiquidityPool, tracked: &TrackedCoins) -> Result<BigDecimal, SwapError> {
    LiquidityValuator::default().value_pool(all_pools, pool, tracked)
}
