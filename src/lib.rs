//! FlightRoutes — enumerate and rank airline routes between countries.
//!
//! Holds a small static directed graph of flight connections and answers
//! two queries: every simple path between two countries with its total
//! duration, and the least-duration path among them. Enumeration is an
//! exhaustive depth-first search; no path between two valid countries is
//! represented as an empty result, never an error.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::RoutePlanner;
pub use graph::{
    find_all_routes, least_duration_route, standard_network, Itinerary, RouteEdge, RouteGraph,
    RouteGraphBuilder,
};
pub use types::{Country, RouteError, RouteResult};
