//! API middleware components

pub mod auth;
pub mod logging;

pub use auth::RequireApiKey;
pub use logging::logging_middleware;
