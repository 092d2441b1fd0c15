//! Route enumeration — exhaustive depth-first search over the graph.

use serde::Serialize;

use crate::types::Country;

use super::RouteGraph;

/// A complete journey between two countries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Visited countries in order, departure first.
    pub stops: Vec<Country>,
    /// Sum of the leg durations, in hours.
    pub total_hours: f64,
}

/// Find every simple path from `start` to `end`, with its total duration.
///
/// Paths are produced depth-first, following each country's outgoing
/// routes in arrival order. A path is complete the moment it reaches
/// `end`; outgoing routes of `end` are never followed further. When
/// `start == end` the single trivial zero-hour itinerary is returned.
///
/// Worst case is exponential in the number of countries, which is fine
/// for the tiny fixed networks this crate serves.
pub fn find_all_routes(graph: &RouteGraph, start: Country, end: Country) -> Vec<Itinerary> {
    let mut results = Vec::new();
    let mut path = vec![start];
    walk(graph, start, end, &mut path, 0.0, &mut results);
    log::debug!("enumerated {} route(s) from {} to {}", results.len(), start, end);
    results
}

fn walk(
    graph: &RouteGraph,
    current: Country,
    end: Country,
    path: &mut Vec<Country>,
    hours: f64,
    out: &mut Vec<Itinerary>,
) {
    if current == end {
        out.push(Itinerary {
            stops: path.clone(),
            total_hours: hours,
        });
        return;
    }

    for edge in graph.neighbors(current) {
        // Simple paths only: never revisit a country
        if path.contains(&edge.to) {
            continue;
        }
        path.push(edge.to);
        walk(graph, edge.to, end, path, hours + edge.hours, out);
        path.pop();
    }
}

/// Pick the itinerary with the smallest total duration.
///
/// On ties the earliest element of `routes` wins. Returns `None` when
/// `routes` is empty.
pub fn least_duration_route(routes: &[Itinerary]) -> Option<&Itinerary> {
    let mut best: Option<&Itinerary> = None;
    for route in routes {
        match best {
            Some(b) if route.total_hours < b.total_hours => best = Some(route),
            None => best = Some(route),
            _ => {}
        }
    }
    best
}
