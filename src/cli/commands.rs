//! CLI command implementations.

use crate::engine::RoutePlanner;
use crate::graph::Itinerary;
use crate::types::{Country, RouteError, RouteResult};

/// Resolve free-text input to a country, or fail with the raw input.
pub fn resolve(input: &str) -> RouteResult<Country> {
    Country::from_name(input)
        .ok_or_else(|| RouteError::UnknownCountry(input.trim().to_string()))
}

fn format_stops(route: &Itinerary) -> String {
    route
        .stops
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// List every possible route between two countries.
pub fn cmd_routes(planner: &RoutePlanner, from: &str, to: &str, json: bool) -> RouteResult<()> {
    let from = resolve(from)?;
    let to = resolve(to)?;
    let routes = planner.all_routes(from, to)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "from": from.code(),
                "to": to.code(),
                "routes": routes,
            })
        );
    } else if routes.is_empty() {
        // Valid but unconnected countries: informational, not an error
        println!("No routes available from {} to {}.", from.name(), to.name());
    } else {
        println!("Starting Country: {}", from.name());
        println!("Destination Country: {}", to.name());
        println!();
        for (i, route) in routes.iter().enumerate() {
            println!("Route {}: {}", i + 1, format_stops(route));
            println!("Expected Duration: {} Hours", route.total_hours);
            println!();
        }
    }
    Ok(())
}

/// Show the least-duration route between two countries.
pub fn cmd_fastest(planner: &RoutePlanner, from: &str, to: &str, json: bool) -> RouteResult<()> {
    let from = resolve(from)?;
    let to = resolve(to)?;
    let route = planner.fastest_route(from, to)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "from": from.code(),
                "to": to.code(),
                "route": route,
            })
        );
    } else {
        println!("Starting Country: {}", from.name());
        println!("Destination Country: {}", to.name());
        println!();
        println!("Route: {}", format_stops(&route));
        println!("Expected Duration: {} Hours", route.total_hours);
    }
    Ok(())
}

/// List the countries served by the network.
pub fn cmd_countries(planner: &RoutePlanner, json: bool) -> RouteResult<()> {
    let countries = planner.graph().all_countries();

    if json {
        let list: Vec<_> = countries
            .iter()
            .map(|c| serde_json::json!({"code": c.code(), "name": c.name()}))
            .collect();
        println!("{}", serde_json::json!({ "countries": list }));
    } else {
        println!("Countries served:");
        for country in &countries {
            println!("  {:<10} {}", country.code(), country.name());
        }
    }
    Ok(())
}
