use crate::utils::constants::BASE_COIN_ID;
use crate::utils::FastHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::Display;

pub type CoinId = u64;

/// Liquidity pool record as served by the explorer API.
///
/// Volumes are decimal integer strings in the smallest unit. The coin pair is
/// unordered: nothing guarantees which coin is stored as the first one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityPool {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub token_id: u64,
    pub first_coin_id: CoinId,
    pub second_coin_id: CoinId,
    pub first_coin_volume: String,
    pub second_coin_volume: String,
    #[serde(default)]
    pub liquidity: String,
    #[serde(default)]
    pub liquidity_bip: String,
    #[serde(default)]
    pub updated_at_block_id: u64,
}

impl Display for LiquidityPool {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}-{})", self.token_symbol(), self.first_coin_id, self.second_coin_id)
    }
}

impl LiquidityPool {
    pub fn new<V: Into<String>>(first_coin_id: CoinId, second_coin_id: CoinId, first_coin_volume: V, second_coin_volume: V) -> Self {
        Self {
            first_coin_id,
            second_coin_id,
            first_coin_volume: first_coin_volume.into(),
            second_coin_volume: second_coin_volume.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Symbol of the pool's LP token
    pub fn token_symbol(&self) -> String {
        format!("LP-{}", self.id)
    }

    pub fn coin_pair(&self) -> CoinPair {
        CoinPair::new(self.first_coin_id, self.second_coin_id)
    }

    /// True when the pool joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: CoinId, b: CoinId) -> bool {
        (self.first_coin_id == a && self.second_coin_id == b) || (self.first_coin_id == b && self.second_coin_id == a)
    }

    /// The pool is already denominated in the base currency.
    pub fn is_base_paired(&self) -> bool {
        self.first_coin_id == BASE_COIN_ID
    }

    pub fn coin_id(&self, side: PoolSide) -> CoinId {
        match side {
            PoolSide::First => self.first_coin_id,
            PoolSide::Second => self.second_coin_id,
        }
    }

    pub fn volume(&self, side: PoolSide) -> &str {
        match side {
            PoolSide::First => &self.first_coin_volume,
            PoolSide::Second => &self.second_coin_volume,
        }
    }
}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PoolSide {
    First,
    Second,
}

impl PoolSide {
    pub const BOTH: [PoolSide; 2] = [PoolSide::First, PoolSide::Second];
}

/// Orientation-free key of a pool, stored as (smaller id, larger id).
/// Serialized as `"low-high"` so it can key JSON maps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinPair(CoinId, CoinId);

impl CoinPair {
    pub fn new(a: CoinId, b: CoinId) -> Self {
        if a <= b { CoinPair(a, b) } else { CoinPair(b, a) }
    }

    pub fn low(&self) -> CoinId {
        self.0
    }

    pub fn high(&self) -> CoinId {
        self.1
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

impl Display for CoinPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

impl Serialize for CoinPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CoinPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for CoinPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once('-').ok_or_else(|| format!("coin pair {s:?} is not in the form a-b"))?;
        let a = a.parse::<CoinId>().map_err(|e| format!("coin pair {s:?}: {e}"))?;
        let b = b.parse::<CoinId>().map_err(|e| format!("coin pair {s:?}: {e}"))?;
        Ok(CoinPair::new(a, b))
    }
}

/// Coins eligible for valuation and routing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedCoins {
    coins: FastHashSet<CoinId>,
}

impl TrackedCoins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, coin_id: CoinId) -> bool {
        self.coins.contains(&coin_id)
    }

    /// At least one side of the pool is tracked.
    pub fn tracks_pool(&self, pool: &LiquidityPool) -> bool {
        self.contains(pool.first_coin_id) || self.contains(pool.second_coin_id)
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

impl FromIterator<CoinId> for TrackedCoins {
    fn from_iter<I: IntoIterator<Item = CoinId>>(iter: I) -> Self {
        Self { coins: iter.into_iter().collect() }
    }
}
