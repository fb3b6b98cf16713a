//! Ranking HTTP adapter module.
//!
//! Provides REST API endpoints for TOPSIS and restock rankings.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::TopsisAppState;
pub use routes::{topsis_router, topsis_routes};
