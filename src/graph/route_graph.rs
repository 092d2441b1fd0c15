//! Core graph structure — countries connected by directed weighted routes.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::{Country, RouteError, RouteResult};

/// A directed flight connection and its duration in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteEdge {
    /// Departure country.
    pub from: Country,
    /// Arrival country.
    pub to: Country,
    /// Flight duration in hours.
    pub hours: f64,
}

impl RouteEdge {
    /// Create a new edge. Validation happens when the graph is built.
    pub fn new(from: Country, to: Country, hours: f64) -> Self {
        Self { from, to, hours }
    }
}

/// An immutable directed route network.
///
/// Edges are stored sorted by (from, to) with an adjacency index into the
/// edge vec, so neighbor iteration order is deterministic.
#[derive(Debug)]
pub struct RouteGraph {
    /// All routes, sorted by departure country, then arrival country.
    edges: Vec<RouteEdge>,
    /// Adjacency index: departure country -> (start, count) in `edges`.
    adjacency: HashMap<Country, (usize, usize)>,
}

impl RouteGraph {
    /// Build a graph from a list of edges, validating every one.
    pub fn from_edges(mut edges: Vec<RouteEdge>) -> RouteResult<Self> {
        for edge in &edges {
            if edge.from == edge.to {
                return Err(RouteError::SelfRoute(edge.from));
            }
            if !edge.hours.is_finite() || edge.hours < 0.0 {
                return Err(RouteError::InvalidDuration {
                    from: edge.from,
                    to: edge.to,
                    hours: edge.hours,
                });
            }
        }

        edges.sort_by(|a, b| a.from.cmp(&b.from).then(a.to.cmp(&b.to)));

        // One weight per ordered pair
        for pair in edges.windows(2) {
            if pair[0].from == pair[1].from && pair[0].to == pair[1].to {
                return Err(RouteError::DuplicateRoute {
                    from: pair[0].from,
                    to: pair[0].to,
                });
            }
        }

        let mut adjacency = HashMap::new();
        let mut i = 0;
        while i < edges.len() {
            let from = edges[i].from;
            let start = i;
            while i < edges.len() && edges[i].from == from {
                i += 1;
            }
            adjacency.insert(from, (start, i - start));
        }

        let graph = Self { edges, adjacency };
        log::debug!(
            "built route graph with {} countries and {} routes",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Outgoing routes of `country`, sorted by arrival country.
    ///
    /// Empty when the country has no departures, including when the graph
    /// does not contain the country at all — absence is not an error here.
    pub fn neighbors(&self, country: Country) -> &[RouteEdge] {
        if let Some(&(start, count)) = self.adjacency.get(&country) {
            &self.edges[start..start + count]
        } else {
            &[]
        }
    }

    /// Every country appearing as a departure or an arrival.
    pub fn all_countries(&self) -> BTreeSet<Country> {
        let mut all = BTreeSet::new();
        for edge in &self.edges {
            all.insert(edge.from);
            all.insert(edge.to);
        }
        all
    }

    /// Number of distinct countries in the network.
    pub fn node_count(&self) -> usize {
        self.all_countries().len()
    }

    /// Number of routes.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All routes (sorted by departure, then arrival).
    pub fn edges(&self) -> &[RouteEdge] {
        &self.edges
    }
}
