use super::coin_graph::CoinGraph;
use super::swap_route::SwapRoute;
use crate::errors::SwapError;
use crate::pool::{CoinId, CoinPair};
use crate::utils::constants::{DEFAULT_MAX_DEPTH, DEFAULT_TOP_K};
use crate::utils::FastHashSet;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// K shortest loopless routes between two coins (Yen's algorithm).
///
/// Every pool costs one hop, so the shortest path primitive is a plain BFS.
/// Routes come back in ascending hop count; equal length routes are ordered by
/// their coin id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteFinder {
    /// Maximum hops per route, 0 disables the limit
    max_depth: usize,
    /// Maximum number of routes to enumerate
    top_k: usize,
}

impl Default for RouteFinder {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, top_k: DEFAULT_TOP_K }
    }
}

impl RouteFinder {
    pub fn new(max_depth: usize, top_k: usize) -> Self {
        Self { max_depth, top_k }
    }

    /// Find up to `top_k` routes from `source` to `target` within `max_depth` hops.
    ///
    /// Fails with `RouteNotFound` when either coin is missing from the graph,
    /// when they are disconnected, or when every candidate is too deep.
    pub fn find_routes(&self, coin_graph: &CoinGraph, source: CoinId, target: CoinId) -> Result<Vec<SwapRoute>, SwapError> {
        let not_found = || SwapError::RouteNotFound { from: source, to: target };

        if self.top_k == 0 || source == target {
            return Err(not_found());
        }

        let no_coins = FastHashSet::default();
        let no_pairs = FastHashSet::default();
        let Some(shortest) = coin_graph.shortest_path(source, target, &no_coins, &no_pairs) else {
            debug!(source, target, "No path between coins");
            return Err(not_found());
        };

        let paths = self.k_shortest_paths(coin_graph, shortest, target);

        let routes: Vec<SwapRoute> = paths
            .into_iter()
            .map(SwapRoute::new)
            // paths are ascending, so everything after the first deep one is deep too
            .take_while(|route| self.max_depth == 0 || route.len() <= self.max_depth)
            .collect();

        if routes.is_empty() {
            debug!(source, target, max_depth = self.max_depth, "All routes exceed depth limit");
            return Err(not_found());
        }

        trace!(source, target, routes = routes.len(), "Found routes");
        Ok(routes)
    }

    fn k_shortest_paths(&self, coin_graph: &CoinGraph, shortest: Vec<CoinId>, target: CoinId) -> Vec<Vec<CoinId>> {
        let mut found: Vec<Vec<CoinId>> = vec![shortest];
        // ordered by (hops, coins) so the cheapest candidate pops first
        let mut candidates: BTreeSet<(usize, Vec<CoinId>)> = BTreeSet::new();

        while found.len() < self.top_k {
            let Some(previous) = found.last() else {
                break;
            };

            // The shortest path that is too deep means every later one is too
            if self.max_depth != 0 && previous.len() - 1 > self.max_depth {
                break;
            }

            for spur_idx in 0..previous.len() - 1 {
                let spur_coin = previous[spur_idx];
                let root = &previous[..=spur_idx];

                // Block the next hop of every accepted path sharing this root
                let blocked_pairs: FastHashSet<CoinPair> = found
                    .iter()
                    .filter(|path| path.len() > spur_idx + 1 && &path[..=spur_idx] == root)
                    .map(|path| CoinPair::new(path[spur_idx], path[spur_idx + 1]))
                    .collect();
                // and every root coin before the spur, to keep the result loopless
                let blocked_coins: FastHashSet<CoinId> = root[..spur_idx].iter().copied().collect();

                let Some(spur_path) = coin_graph.shortest_path(spur_coin, target, &blocked_coins, &blocked_pairs) else {
                    continue;
                };

                let mut candidate = root[..spur_idx].to_vec();
                candidate.extend(spur_path);
                if !found.contains(&candidate) {
                    candidates.insert((candidate.len(), candidate));
                }
            }

            let Some((_, next)) = candidates.pop_first() else {
                break;
            };
            found.push(next);
        }

        found
    }
}

/// Convenience wrapper over [`RouteFinder`].
pub fn find_routes(
    coin_graph: &CoinGraph,
    source: CoinId,
    target: CoinId,
    max_depth: usize,
    top_k: usize,
) -> Result<Vec<SwapRoute>, SwapError> {
    RouteFinder::new(max_depth, top_k).find_routes(coin_graph, source, target)
}
