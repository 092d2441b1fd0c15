//! In-memory route graph — the core data structure and search.

pub mod builder;
pub mod network;
pub mod route_graph;
pub mod search;

pub use builder::RouteGraphBuilder;
pub use network::standard_network;
pub use route_graph::{RouteEdge, RouteGraph};
pub use search::{find_all_routes, least_duration_route, Itinerary};
