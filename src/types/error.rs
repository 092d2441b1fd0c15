//! Error types for the flight-routes library.

use thiserror::Error;

use super::Country;

/// All errors that can occur in the flight-routes library.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Input that names no known country, or a country absent from the graph.
    #[error("'{0}' is not a valid country")]
    UnknownCountry(String),

    /// Start and destination are the same country.
    #[error("starting country and destination country cannot be the same ({})", .0.name())]
    SameCountry(Country),

    /// No itinerary connects the two countries.
    #[error("no routes available from {} to {}", .from.name(), .to.name())]
    NoRouteFound { from: Country, to: Country },

    /// A route from a country to itself.
    #[error("route from {} to itself is not allowed", .0.name())]
    SelfRoute(Country),

    /// Two routes share the same ordered country pair.
    #[error("duplicate route from {} to {}", .from.name(), .to.name())]
    DuplicateRoute { from: Country, to: Country },

    /// A route duration that is negative or not finite.
    #[error("invalid duration {} for route from {} to {}", .hours, .from.name(), .to.name())]
    InvalidDuration {
        from: Country,
        to: Country,
        hours: f64,
    },
}

/// Convenience result type for flight-routes operations.
pub type RouteResult<T> = Result<T, RouteError>;
