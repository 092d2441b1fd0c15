//! Query layer — validation and derived queries over the graph.

pub mod planner;

pub use planner::RoutePlanner;
