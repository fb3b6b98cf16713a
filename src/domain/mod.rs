//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared error vocabulary
//! - `topsis` - Pure TOPSIS ranking pipeline
//! - `restock` - Restock candidates and their criteria profile

pub mod foundation;
pub mod restock;
pub mod topsis;
