//! Distance Calculator - Euclidean separation of each alternative from an ideal vector.

use serde::{Deserialize, Serialize};

use super::normalizer::scaled_length;
use super::{DecisionMatrix, IdealVectors, MalformedInput};

/// Per-alternative distances to both ideal vectors, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distances {
    /// Distance to the positive ideal (dPlus).
    pub to_positive: Vec<f64>,
    /// Distance to the negative ideal (dMinus).
    pub to_negative: Vec<f64>,
}

pub struct DistanceCalculator;

impl DistanceCalculator {
    /// `sqrt(Σ_j (row[j] - ideal[j])^2)` for every row.
    ///
    /// Differences are rescaled by their largest magnitude before squaring,
    /// so a distance is finite whenever it is representable.
    pub fn to_ideal(weighted: &DecisionMatrix, ideal: &[f64]) -> Result<Vec<f64>, MalformedInput> {
        if ideal.len() != weighted.column_count() {
            return Err(MalformedInput::ColumnCountMismatch {
                columns: weighted.column_count(),
                provided: ideal.len(),
            });
        }

        Ok(weighted
            .rows()
            .iter()
            .map(|row| {
                let diffs: Vec<f64> = row
                    .iter()
                    .zip(ideal)
                    .map(|(value, target)| value - target)
                    .collect();
                let (scale, factor) = scaled_length(&diffs);
                scale * factor
            })
            .collect())
    }

    /// Distances to both ideal vectors.
    pub fn compute(
        weighted: &DecisionMatrix,
        ideals: &IdealVectors,
    ) -> Result<Distances, MalformedInput> {
        Ok(Distances {
            to_positive: Self::to_ideal(weighted, &ideals.positive)?,
            to_negative: Self::to_ideal(weighted, &ideals.negative)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_four_five_triangle() {
        let matrix = DecisionMatrix::from_rows(vec![vec![3.0, 4.0], vec![0.0, 0.0]]).unwrap();
        let distances = DistanceCalculator::to_ideal(&matrix, &[0.0, 0.0]).unwrap();
        assert_eq!(distances, vec![5.0, 0.0]);
    }

    #[test]
    fn computes_both_directions() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0], vec![0.0]]).unwrap();
        let ideals = IdealVectors {
            positive: vec![1.0],
            negative: vec![0.0],
        };

        let distances = DistanceCalculator::compute(&matrix, &ideals).unwrap();
        assert_eq!(distances.to_positive, vec![0.0, 1.0]);
        assert_eq!(distances.to_negative, vec![1.0, 0.0]);
    }

    #[test]
    fn large_differences_do_not_overflow() {
        let matrix = DecisionMatrix::from_rows(vec![vec![3e200, 4e200]]).unwrap();
        let distance = DistanceCalculator::to_ideal(&matrix, &[0.0, 0.0]).unwrap()[0];

        assert!(distance.is_finite());
        assert!((distance / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn small_differences_do_not_underflow() {
        let matrix = DecisionMatrix::from_rows(vec![vec![3e-200, 4e-200]]).unwrap();
        let distance = DistanceCalculator::to_ideal(&matrix, &[0.0, 0.0]).unwrap()[0];

        assert!(distance > 0.0);
        assert!((distance / 5e-200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_ideal_of_wrong_length() {
        let matrix = DecisionMatrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert!(matches!(
            DistanceCalculator::to_ideal(&matrix, &[1.0]),
            Err(MalformedInput::ColumnCountMismatch { columns: 2, provided: 1 })
        ));
    }
}
