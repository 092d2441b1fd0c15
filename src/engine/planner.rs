//! Validated query layer over the route graph.

use crate::graph::{find_all_routes, least_duration_route, Itinerary, RouteGraph};
use crate::types::{Country, RouteError, RouteResult};

/// Answers route queries against a fixed graph.
///
/// The search core is total and never errors; this layer performs the
/// input validation the core deliberately leaves to its callers —
/// both countries must exist in the graph and must differ.
pub struct RoutePlanner {
    graph: RouteGraph,
}

impl RoutePlanner {
    /// Create a planner over an immutable graph.
    pub fn new(graph: RouteGraph) -> Self {
        Self { graph }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    fn validate(&self, from: Country, to: Country) -> RouteResult<()> {
        let known = self.graph.all_countries();
        if !known.contains(&from) {
            return Err(RouteError::UnknownCountry(from.name().to_string()));
        }
        if !known.contains(&to) {
            return Err(RouteError::UnknownCountry(to.name().to_string()));
        }
        if from == to {
            return Err(RouteError::SameCountry(from));
        }
        Ok(())
    }

    /// Every itinerary from `from` to `to`, in depth-first order.
    ///
    /// An empty vec means the countries are valid but unconnected.
    pub fn all_routes(&self, from: Country, to: Country) -> RouteResult<Vec<Itinerary>> {
        self.validate(from, to)?;
        Ok(find_all_routes(&self.graph, from, to))
    }

    /// The least-duration itinerary from `from` to `to`.
    ///
    /// On ties the first itinerary in enumeration order wins.
    pub fn fastest_route(&self, from: Country, to: Country) -> RouteResult<Itinerary> {
        let routes = self.all_routes(from, to)?;
        least_duration_route(&routes)
            .cloned()
            .ok_or(RouteError::NoRouteFound { from, to })
    }
}
