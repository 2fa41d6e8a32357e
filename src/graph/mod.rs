pub mod coin_graph;
pub mod route_finder;
pub mod swap_route;

pub use coin_graph::{CoinGraph, CoinNode, PoolEdge};
pub use route_finder::{RouteFinder, find_routes};
pub use swap_route::SwapRoute;
