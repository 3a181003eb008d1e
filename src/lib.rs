//! Outfit recommendation service
//!
//! Suggests a clothing combination for an event, either for the season
//! observed at the caller's location or for a season the caller supplies.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
