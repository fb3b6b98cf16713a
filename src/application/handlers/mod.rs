//! Application handlers.
//!
//! Command handlers that validate input, run the ranking, and shape output.

pub mod rank_alternatives;
pub mod rank_restock;

pub use rank_alternatives::{
    RankAlternativesCommand, RankAlternativesHandler, RankAlternativesResult,
};
pub use rank_restock::{RankRestockCommand, RankRestockHandler, RankRestockResult, RawRestockInput};
