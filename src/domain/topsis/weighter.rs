//! Weighter - Scales each normalized column by its criterion weight.

use super::{DecisionMatrix, MalformedInput};

pub struct Weighter;

impl Weighter {
    /// `weighted[i][j] = normalized[i][j] * weights[j]`.
    ///
    /// Weights are applied as given, without re-normalizing them.
    pub fn apply(matrix: &DecisionMatrix, weights: &[f64]) -> Result<DecisionMatrix, MalformedInput> {
        if weights.len() != matrix.column_count() {
            return Err(MalformedInput::ColumnCountMismatch {
                columns: matrix.column_count(),
                provided: weights.len(),
            });
        }

        Ok(matrix.map_cells(|j, value| value * weights[j]))
    }
}
