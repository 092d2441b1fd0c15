//! All data types for the flight-routes library.

pub mod country;
pub mod error;

pub use country::Country;
pub use error::{RouteError, RouteResult};
