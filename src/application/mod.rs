//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations. The ranking core holds no
//! state, so handlers own nothing beyond their configuration.

pub mod handlers;

pub use handlers::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
    RankRestockCommand, RankRestockHandler, RankRestockResult, RawRestockInput,
};
