use crate::pool::CoinId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Loop-free sequence of coins from a source coin to a target coin.
/// Every consecutive pair of coins is one hop, i.e. one pool swap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SwapRoute {
    // The coins of the route e.g. coin1 -> coin2 -> base
    pub coins: Vec<CoinId>,
}

impl Display for SwapRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let coins: Vec<String> = self.coins.iter().map(|coin_id| coin_id.to_string()).collect();
        write!(f, "SwapRoute({})", coins.join(" -> "))
    }
}

impl SwapRoute {
    pub fn new(coins: Vec<CoinId>) -> Self {
        Self { coins }
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn coins_count(&self) -> usize {
        self.coins.len()
    }

    /// The hop count of the route
    pub fn len(&self) -> usize {
        self.coins.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<CoinId> {
        self.coins.first().copied()
    }

    pub fn target(&self) -> Option<CoinId> {
        self.coins.last().copied()
    }

    pub fn contains_coin(&self, coin_id: CoinId) -> bool {
        self.coins.contains(&coin_id)
    }

    /// Hops as (from, to) pairs in travel order.
    pub fn hops(&self) -> impl DoubleEndedIterator<Item = (CoinId, CoinId)> + '_ {
        self.coins.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_swap_route() {
        let route = SwapRoute::new(vec![3, 2, 1, 0]);

        assert!(!route.is_empty());
        assert_eq!(route.coins_count(), 4);
        assert_eq!(route.len(), 3);
        assert_eq!(route.source(), Some(3));
        assert_eq!(route.target(), Some(0));
        assert!(route.contains_coin(2));
        assert!(!route.contains_coin(7));
        assert_eq!(route.to_string(), "SwapRoute(3 -> 2 -> 1 -> 0)");
    }

    #[test]
    fn test_hops() {
        let route = SwapRoute::new(vec![3, 2, 0]);

        assert_eq!(route.hops().collect::<Vec<_>>(), vec![(3, 2), (2, 0)]);
        assert_eq!(route.hops().rev().collect::<Vec<_>>(), vec![(2, 0), (3, 2)]);
        assert_eq!(SwapRoute::new(vec![3]).hops().count(), 0);
    }

    #[test]
    fn test_empty_route() {
        let route = SwapRoute::default();
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
        assert_eq!(route.source(), None);
    }
}
