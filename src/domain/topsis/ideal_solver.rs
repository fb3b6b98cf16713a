//! Ideal Solver - Positive and negative ideal vectors from the weighted matrix.

use serde::{Deserialize, Serialize};

use super::{CriterionKind, DecisionMatrix, MalformedInput};

/// Best and worst attainable value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealVectors {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

pub struct IdealSolver;

impl IdealSolver {
    /// Derives the ideal vectors column by column.
    ///
    /// # Algorithm
    /// - Benefit: positive = column max, negative = column min
    /// - Cost: positive = column min, negative = column max
    pub fn solve(
        weighted: &DecisionMatrix,
        kinds: &[CriterionKind],
    ) -> Result<IdealVectors, MalformedInput> {
        if kinds.len() != weighted.column_count() {
            return Err(MalformedInput::ColumnCountMismatch {
                columns: weighted.column_count(),
                provided: kinds.len(),
            });
        }

        let (positive, negative): (Vec<f64>, Vec<f64>) = kinds
            .iter()
            .enumerate()
            .map(|(j, kind)| {
                let (min, max) = Self::column_bounds(weighted, j);
                match kind {
                    CriterionKind::Benefit => (max, min),
                    CriterionKind::Cost => (min, max),
                }
            })
            .unzip();

        Ok(IdealVectors { positive, negative })
    }

    fn column_bounds(matrix: &DecisionMatrix, j: usize) -> (f64, f64) {
        matrix
            .column(j)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}
