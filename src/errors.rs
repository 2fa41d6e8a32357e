use crate::pool::CoinId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwapError {
    // Graph builder
    #[error("graph construction failed: {0}")]
    GraphConstruction(String),

    // Route finder
    #[error("route not found from coin {from} to coin {to}")]
    RouteNotFound { from: CoinId, to: CoinId },
    #[error("invalid route {0}: at least two coins are required")]
    InvalidRoute(String),

    // Price composer
    #[error("no pool connects coin {from} and coin {to}")]
    PoolNotFound { from: CoinId, to: CoinId },
    #[error("reserve {reserve} cannot be used as a price denominator")]
    ZeroReserve { reserve: String },

    // Numeric layer
    #[error("invalid amount {value:?}: {reason}")]
    Parse { value: String, reason: &'static str },
}

impl SwapError {
    /// Routing failures are a legitimate business outcome, everything else is a fault.
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, SwapError::RouteNotFound { .. })
    }
}
