// Graph Layer: coin graph construction and route search
pub mod graph;
// Logic Layer: price composition and pool valuation
pub mod logic;

// Common data model, errors and utilities
pub mod errors;
pub mod pool;
pub mod utils;

pub use errors::SwapError;
pub use graph::{CoinGraph, RouteFinder, SwapRoute, find_routes};
pub use logic::{LiquidityValuator, PoolValuation, ValuationConfigSection, ValuationOutcome, compose_price, value_pool};
pub use pool::{CoinId, CoinPair, LiquidityPool, PoolSide, TrackedCoins};
pub use utils::{BASE_COIN_ID, ConfigLoader, ConfigLoaderSync, LoadConfigError};
