//! The built-in route network served by the application.

use crate::types::Country::*;
use crate::types::RouteResult;

use super::builder::RouteGraphBuilder;
use super::route_graph::RouteGraph;

/// Build the standard flight network.
///
/// Constructed once at startup; the graph never changes afterwards.
pub fn standard_network() -> RouteResult<RouteGraph> {
    RouteGraphBuilder::new()
        .route(SriLanka, UnitedKingdom, 11.45)
        .route(SriLanka, Japan, 8.0)
        .route(SriLanka, Singapore, 4.0)
        .route(SriLanka, Australia, 9.25)
        .route(UnitedKingdom, UnitedStates, 8.0)
        .route(Japan, UnitedStates, 16.0)
        .route(Japan, Australia, 10.0)
        .route(Singapore, Japan, 4.0)
        .route(Singapore, Australia, 7.25)
        .build()
}
