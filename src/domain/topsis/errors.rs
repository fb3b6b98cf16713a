//! Error type for precondition violations inside the ranking core.

use thiserror::Error;

/// Input that violates the ranking core's contract.
///
/// The core never coerces bad input: every mismatch between alternatives,
/// weights and criterion kinds surfaces as one of these variants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    #[error("At least one alternative is required")]
    NoAlternatives,

    #[error("At least one criterion is required")]
    NoCriteria,

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Alternative '{alternative}' has {actual} criteria, expected {expected}")]
    ArityMismatch {
        alternative: String,
        expected: usize,
        actual: usize,
    },

    #[error("Got {weights} weights but {kinds} criterion types")]
    CriteriaCountMismatch { weights: usize, kinds: usize },

    #[error("Matrix has {columns} columns but {provided} per-criterion values were given")]
    ColumnCountMismatch { columns: usize, provided: usize },

    #[error("Weight {index} must be a finite non-negative number, got {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Unknown criterion type '{0}', expected 'benefit' or 'cost'")]
    UnknownCriterionKind(String),

    #[error(
        "Distance vectors do not line up: {names} names, {to_positive} positive, {to_negative} negative"
    )]
    DistanceLengthMismatch {
        names: usize,
        to_positive: usize,
        to_negative: usize,
    },
}
