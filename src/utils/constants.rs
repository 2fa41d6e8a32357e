/// Coin id reserved for the base currency. It never names a real coin row and
/// only ever appears as a route target.
pub const BASE_COIN_ID: u64 = 0;

/// Number of decimals between the smallest unit (pip) and the display unit (bip).
pub const PIP_DECIMALS: i64 = 18;

/// Maximum number of hops a valuation route may take.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Number of candidate routes requested per valuation.
pub const DEFAULT_TOP_K: usize = 1;

/// Pools are valued as twice their base-denominated side (symmetric reserves).
pub const LIQUIDITY_FACTOR: u32 = 2;
