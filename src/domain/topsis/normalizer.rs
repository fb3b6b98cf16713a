//! Normalizer - Euclidean (vector) normalization of each criterion column.

use super::DecisionMatrix;

/// Divisor substituted for a zero column norm, so an all-zero column stays all-zero.
pub const ZERO_NORM_DIVISOR: f64 = 1.0;

/// Euclidean length of `values`, split as `length = scale * factor`.
///
/// `scale` is the largest magnitude, so every squared term lies in `[0, 1]`
/// and neither overflows nor underflows even when `length` itself is not
/// representable. All zeros give `(0.0, 0.0)`; an infinite value gives
/// `(INFINITY, 1.0)`.
pub(crate) fn scaled_length(values: &[f64]) -> (f64, f64) {
    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if scale == 0.0 {
        return (0.0, 0.0);
    }
    if scale.is_infinite() {
        return (f64::INFINITY, 1.0);
    }

    let factor = values
        .iter()
        .map(|v| {
            let r = v / scale;
            r * r
        })
        .sum::<f64>()
        .sqrt();
    (scale, factor)
}

/// Column-wise vector normalization.
pub struct Normalizer;

impl Normalizer {
    /// Scales every column to unit Euclidean length.
    ///
    /// Each cell is divided by the column maximum magnitude first and then by
    /// the length of the rescaled column, so columns of any finite magnitude
    /// come out with unit length.
    ///
    /// # Edge Cases
    /// - All-zero column: Divides by [`ZERO_NORM_DIVISOR`], stays all zeros
    pub fn normalize(matrix: &DecisionMatrix) -> DecisionMatrix {
        let lengths: Vec<(f64, f64)> = (0..matrix.column_count())
            .map(|j| scaled_length(&matrix.column(j).collect::<Vec<_>>()))
            .collect();

        matrix.map_cells(|j, value| match lengths[j] {
            (scale, _) if scale == 0.0 => value / ZERO_NORM_DIVISOR,
            (scale, factor) => value / scale / factor,
        })
    }

    /// Euclidean norm of column `j`.
    ///
    /// Saturates to infinity when the norm exceeds `f64::MAX`.
    pub fn column_norm(matrix: &DecisionMatrix, j: usize) -> f64 {
        let (scale, factor) = scaled_length(&matrix.column(j).collect::<Vec<_>>());
        scale * factor
    }
}
