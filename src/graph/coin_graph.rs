use crate::errors::SwapError;
use crate::pool::{CoinId, CoinPair, LiquidityPool};
use crate::utils::{FastHashMap, FastHashSet};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::debug;

/// Request-scoped routing graph. Vertices are coins, every pool is one
/// undirected edge of unit cost. Built once per valuation and dropped with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinGraph {
    // We never delete nodes or edges, so a plain (non-stable) graph is enough
    pub graph: UnGraph<CoinNode, PoolEdge, usize>,
    // coin id -> node index
    pub coin_index: FastHashMap<CoinId, NodeIndex<usize>>,
    // coin pair -> edge index
    pub pair_index: FastHashMap<CoinPair, EdgeIndex<usize>>,
}

impl CoinGraph {
    pub fn new() -> Self {
        Self { graph: UnGraph::default(), coin_index: FastHashMap::default(), pair_index: FastHashMap::default() }
    }

    /// Build the graph from an already filtered pool list.
    ///
    /// Coins are deduplicated, pools are not: a second pool for the same coin
    /// pair means the snapshot is corrupt and is rejected.
    pub fn build<'a, I>(pools: I) -> Result<Self, SwapError>
    where
        I: IntoIterator<Item = &'a LiquidityPool>,
    {
        let mut coin_graph = CoinGraph::new();
        for pool in pools {
            coin_graph.add_pool(pool)?;
        }

        debug!(coins = coin_graph.coin_count(), pools = coin_graph.pool_count(), "Built coin graph");
        Ok(coin_graph)
    }

    pub fn add_or_get_coin_idx(&mut self, coin_id: CoinId) -> NodeIndex<usize> {
        *self.coin_index.entry(coin_id).or_insert_with(|| self.graph.add_node(CoinNode::new(coin_id)))
    }

    // Add a pool as an edge between its two coins.
    pub fn add_pool(&mut self, pool: &LiquidityPool) -> Result<EdgeIndex<usize>, SwapError> {
        let pair = pool.coin_pair();
        if pair.is_loop() {
            return Err(SwapError::GraphConstruction(format!("pool {pool} swaps coin {} with itself", pair.low())));
        }
        if self.pair_index.contains_key(&pair) {
            return Err(SwapError::GraphConstruction(format!("duplicate pool for coin pair {pair}: {pool}")));
        }

        let node_first = self.add_or_get_coin_idx(pool.first_coin_id);
        let node_second = self.add_or_get_coin_idx(pool.second_coin_id);
        let edge_index = self.graph.add_edge(node_first, node_second, PoolEdge::new(pair, pool.id));
        self.pair_index.insert(pair, edge_index);

        Ok(edge_index)
    }

    pub fn contains_coin(&self, coin_id: CoinId) -> bool {
        self.coin_index.contains_key(&coin_id)
    }

    pub fn coin_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn pool_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Breadth-first shortest path between two coins, skipping the blocked
    /// coins and pools. Neighbours are expanded in ascending coin id so equal
    /// length paths always resolve the same way.
    pub fn shortest_path(
        &self,
        from: CoinId,
        to: CoinId,
        blocked_coins: &FastHashSet<CoinId>,
        blocked_pairs: &FastHashSet<CoinPair>,
    ) -> Option<Vec<CoinId>> {
        let start = *self.coin_index.get(&from)?;
        let end = *self.coin_index.get(&to)?;
        if blocked_coins.contains(&from) || blocked_coins.contains(&to) {
            return None;
        }

        let mut predecessors: FastHashMap<NodeIndex<usize>, NodeIndex<usize>> = FastHashMap::default();
        let mut visited: FastHashSet<NodeIndex<usize>> = FastHashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            if node == end {
                return Some(self.collect_path(&predecessors, start, end));
            }

            let mut neighbours: Vec<(CoinId, NodeIndex<usize>)> = self
                .graph
                .edges(node)
                .filter(|edge| !blocked_pairs.contains(&edge.weight().pair))
                .map(|edge| (self.graph[edge.target()].coin_id, edge.target()))
                .filter(|(coin_id, _)| !blocked_coins.contains(coin_id))
                .collect();
            neighbours.sort_unstable();

            for (_, next) in neighbours {
                if visited.insert(next) {
                    predecessors.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        None
    }

    fn collect_path(
        &self,
        predecessors: &FastHashMap<NodeIndex<usize>, NodeIndex<usize>>,
        start: NodeIndex<usize>,
        end: NodeIndex<usize>,
    ) -> Vec<CoinId> {
        let mut path = vec![self.graph[end].coin_id];
        let mut node = end;
        while node != start {
            let Some(&previous) = predecessors.get(&node) else {
                break;
            };
            path.push(self.graph[previous].coin_id);
            node = previous;
        }
        path.reverse();
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoinNode {
    pub coin_id: CoinId,
}

impl CoinNode {
    pub fn new(coin_id: CoinId) -> Self {
        Self { coin_id }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PoolEdge {
    pub pair: CoinPair,
    pub pool_id: u64,
}

impl PoolEdge {
    pub fn new(pair: CoinPair, pool_id: u64) -> Self {
        Self { pair, pool_id }
    }
}
