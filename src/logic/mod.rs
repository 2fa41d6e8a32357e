/// Logic Layer - pricing and valuation
///
/// Turns a pool snapshot into base-currency valuations:
/// - Price composition along swap routes
/// - Per-pool and whole-snapshot liquidity valuation
/// - Valuation settings loaded from TOML
pub mod config;
pub mod liquidity_valuator;
pub mod price_composer;
pub mod types;

pub use config::{ValuationConfigRoot, ValuationConfigSection};
pub use liquidity_valuator::{LiquidityValuator, value_pool};
pub use price_composer::compose_price;
pub use types::{PoolValuation, ValuationOutcome};
