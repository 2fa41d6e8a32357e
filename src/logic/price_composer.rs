use crate::errors::SwapError;
use crate::graph::SwapRoute;
use crate::pool::LiquidityPool;
use crate::utils::amount::compute_price;
use bigdecimal::BigDecimal;
use tracing::error;

/// Compose the price of one unit of the route's source coin in the route's
/// target coin.
///
/// Hops are walked from the target back to the source. Each hop `(from, to)`
/// contributes `reserve(to) / reserve(from)` of the pool joining both coins,
/// whichever orientation the pool is stored in. Returns `None` when no hop
/// contributed a rate.
pub fn compose_price(route: &SwapRoute, pools: &[LiquidityPool]) -> Result<Option<BigDecimal>, SwapError> {
    if route.coins_count() < 2 {
        return Err(SwapError::InvalidRoute(route.to_string()));
    }

    let mut price: Option<BigDecimal> = None;
    for (from, to) in route.hops().rev() {
        let Some(pool) = pools.iter().find(|pool| pool.connects(from, to)) else {
            // The graph was built from a different pool set than this one
            error!(%route, from, to, "Route hop has no backing pool");
            return Err(SwapError::PoolNotFound { from, to });
        };

        let hop_price = if pool.first_coin_id == from {
            compute_price(&pool.second_coin_volume, &pool.first_coin_volume)?
        } else {
            compute_price(&pool.first_coin_volume, &pool.second_coin_volume)?
        };

        price = Some(match price {
            Some(accumulated) => accumulated * hop_price,
            None => hop_price,
        });
    }

    Ok(price)
}
