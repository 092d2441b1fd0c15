//! Fluent API for building RouteGraph instances.

use crate::types::{Country, RouteResult};

use super::route_graph::{RouteEdge, RouteGraph};

/// Fluent builder for constructing a RouteGraph.
pub struct RouteGraphBuilder {
    edges: Vec<RouteEdge>,
}

impl RouteGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Add a directed route with its duration in hours.
    pub fn route(mut self, from: Country, to: Country, hours: f64) -> Self {
        self.edges.push(RouteEdge::new(from, to, hours));
        self
    }

    /// Build the final RouteGraph, validating every route.
    pub fn build(self) -> RouteResult<RouteGraph> {
        RouteGraph::from_edges(self.edges)
    }
}

impl Default for RouteGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
