//! Restock Module - The restock-prioritisation decision problem.
//!
//! Candidates are entered with eight raw fields. The profile collapses
//! stock on hand and stock required into a supply gap, optionally rescales
//! delivery time across all candidates, and ranks the resulting seven
//! criteria with fixed weights.

mod candidate;
mod profile;

pub use candidate::{RestockCandidate, RESTOCK_FIELD_NAMES};
pub use profile::{DeliveryTimeMode, RestockProfile, RESTOCK_CRITERIA_NAMES};
