//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary shared by the restock and ranking modules.

mod errors;

pub use errors::{DomainError, ErrorCode, ValidationError};
