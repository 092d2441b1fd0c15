//! Search tests: exhaustive enumeration and least-duration selection.

use std::collections::HashSet;

use flight_routes::graph::{
    find_all_routes, least_duration_route, standard_network, Itinerary, RouteGraph,
    RouteGraphBuilder,
};
use flight_routes::types::Country;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn stops(route: &Itinerary) -> Vec<Country> {
    route.stops.clone()
}

/// Recompute an itinerary's duration from the graph's edges.
fn recomputed_hours(graph: &RouteGraph, route: &Itinerary) -> f64 {
    route
        .stops
        .windows(2)
        .map(|leg| {
            graph
                .neighbors(leg[0])
                .iter()
                .find(|e| e.to == leg[1])
                .map(|e| e.hours)
                .unwrap_or(f64::NAN)
        })
        .sum()
}

// ==================== Concrete Scenario ====================

#[test]
fn test_sl_to_usa_enumerates_all_three_routes() {
    let graph = standard_network().unwrap();
    let routes = find_all_routes(&graph, Country::SriLanka, Country::UnitedStates);
    assert_eq!(routes.len(), 3);

    let via_uk = routes
        .iter()
        .find(|r| {
            stops(r)
                == vec![
                    Country::SriLanka,
                    Country::UnitedKingdom,
                    Country::UnitedStates,
                ]
        })
        .expect("route via UK");
    assert!(approx(via_uk.total_hours, 19.45));

    let via_japan = routes
        .iter()
        .find(|r| stops(r) == vec![Country::SriLanka, Country::Japan, Country::UnitedStates])
        .expect("route via Japan");
    assert!(approx(via_japan.total_hours, 24.0));

    let via_singapore = routes
        .iter()
        .find(|r| {
            stops(r)
                == vec![
                    Country::SriLanka,
                    Country::Singapore,
                    Country::Japan,
                    Country::UnitedStates,
                ]
        })
        .expect("route via Singapore and Japan");
    assert!(approx(via_singapore.total_hours, 24.0));
}

#[test]
fn test_sl_to_usa_depth_first_order_is_deterministic() {
    // Outgoing routes are iterated in arrival order, so the enumeration
    // order is fixed: via Japan, via Singapore+Japan, via UK.
    let graph = standard_network().unwrap();
    let routes = find_all_routes(&graph, Country::SriLanka, Country::UnitedStates);
    let orders: Vec<Vec<Country>> = routes.iter().map(stops).collect();
    assert_eq!(
        orders,
        vec![
            vec![Country::SriLanka, Country::Japan, Country::UnitedStates],
            vec![
                Country::SriLanka,
                Country::Singapore,
                Country::Japan,
                Country::UnitedStates,
            ],
            vec![
                Country::SriLanka,
                Country::UnitedKingdom,
                Country::UnitedStates,
            ],
        ]
    );
}

#[test]
fn test_fastest_sl_to_usa_is_via_uk() {
    let graph = standard_network().unwrap();
    let routes = find_all_routes(&graph, Country::SriLanka, Country::UnitedStates);
    let best = least_duration_route(&routes).unwrap();
    assert_eq!(
        stops(best),
        vec![
            Country::SriLanka,
            Country::UnitedKingdom,
            Country::UnitedStates,
        ]
    );
    assert!(approx(best.total_hours, 19.45));
}

#[test]
fn test_usa_to_sl_has_no_routes() {
    // USA has no outgoing routes
    let graph = standard_network().unwrap();
    let routes = find_all_routes(&graph, Country::UnitedStates, Country::SriLanka);
    assert!(routes.is_empty());
}

// ==================== Algorithm Properties ====================

#[test]
fn test_start_equals_end_yields_single_trivial_route() {
    let graph = standard_network().unwrap();
    for country in Country::ALL {
        let routes = find_all_routes(&graph, country, country);
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stops, vec![country]);
        assert!(approx(routes[0].total_hours, 0.0));
    }
}

#[test]
fn test_destination_is_never_a_pass_through() {
    // Japan has outgoing routes, but a path ends the moment it arrives there
    let graph = standard_network().unwrap();
    let routes = find_all_routes(&graph, Country::SriLanka, Country::Japan);
    assert_eq!(routes.len(), 2);
    for route in &routes {
        assert_eq!(route.stops.last(), Some(&Country::Japan));
        assert_eq!(
            route.stops.iter().filter(|&&c| c == Country::Japan).count(),
            1
        );
    }
}

#[test]
fn test_cycles_are_not_revisited() {
    let graph = RouteGraphBuilder::new()
        .route(Country::Japan, Country::Singapore, 1.0)
        .route(Country::Singapore, Country::Japan, 1.0)
        .route(Country::Japan, Country::Australia, 2.0)
        .route(Country::Singapore, Country::Australia, 3.0)
        .build()
        .unwrap();

    let routes = find_all_routes(&graph, Country::Japan, Country::Australia);
    assert_eq!(routes.len(), 2);
    let direct = routes
        .iter()
        .find(|r| r.stops.len() == 2)
        .expect("direct route");
    assert!(approx(direct.total_hours, 2.0));
    let via_singapore = routes
        .iter()
        .find(|r| r.stops.len() == 3)
        .expect("route via Singapore");
    assert!(approx(via_singapore.total_hours, 4.0));
}

#[test]
fn test_all_pairs_routes_are_simple_and_consistent() {
    let graph = standard_network().unwrap();
    for start in Country::ALL {
        for end in Country::ALL {
            if start == end {
                continue;
            }
            for route in find_all_routes(&graph, start, end) {
                assert_eq!(route.stops.first(), Some(&start));
                assert_eq!(route.stops.last(), Some(&end));

                let unique: HashSet<Country> = route.stops.iter().copied().collect();
                assert_eq!(unique.len(), route.stops.len(), "repeated country");

                assert!(
                    approx(route.total_hours, recomputed_hours(&graph, &route)),
                    "total does not match the sum of leg durations"
                );
            }
        }
    }
}

#[test]
fn test_enumeration_is_idempotent() {
    let graph = standard_network().unwrap();
    let first = find_all_routes(&graph, Country::SriLanka, Country::UnitedStates);
    let second = find_all_routes(&graph, Country::SriLanka, Country::UnitedStates);
    assert_eq!(first, second);
}

// ==================== Least-Duration Selection ====================

#[test]
fn test_least_duration_of_empty_is_none() {
    assert!(least_duration_route(&[]).is_none());
}

#[test]
fn test_least_duration_is_not_greater_than_any_other() {
    let graph = standard_network().unwrap();
    for start in Country::ALL {
        for end in Country::ALL {
            let routes = find_all_routes(&graph, start, end);
            if let Some(best) = least_duration_route(&routes) {
                for route in &routes {
                    assert!(best.total_hours <= route.total_hours);
                }
            } else {
                assert!(routes.is_empty());
            }
        }
    }
}

#[test]
fn test_least_duration_tie_keeps_first() {
    let routes = vec![
        Itinerary {
            stops: vec![Country::SriLanka, Country::Japan],
            total_hours: 8.0,
        },
        Itinerary {
            stops: vec![Country::SriLanka, Country::Singapore, Country::Japan],
            total_hours: 8.0,
        },
    ];
    let best = least_duration_route(&routes).unwrap();
    assert_eq!(best.stops, vec![Country::SriLanka, Country::Japan]);
}
