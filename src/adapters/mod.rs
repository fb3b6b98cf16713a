//! Adapters - Connections between the domain and the outside world.
//!
//! - `http` - Axum REST surface for the ranking handlers

pub mod http;

pub use http::app_router;
