//! Feature Deriver - Collapses raw inputs into the criteria that get scored.
//!
//! Two kinds of derivation exist:
//! - Row-local: computed from one alternative's raw values (supply gap).
//! - Column-level: computed from an entire raw column across all
//!   alternatives (delivery-time percentage). These must run on the
//!   complete raw matrix before any row is assembled.

/// Raw-to-derived criteria transformations.
pub struct FeatureDeriver;

impl FeatureDeriver {
    /// Supply gap as a percentage of the required stock.
    ///
    /// `((required - on_hand) / required) * 100`. Negative when stock on
    /// hand exceeds the requirement.
    ///
    /// # Edge Cases
    /// - `required == 0`: Returns 0
    pub fn supply_gap_percentage(stock_on_hand: f64, stock_required: f64) -> f64 {
        if stock_required == 0.0 {
            return 0.0;
        }
        ((stock_required - stock_on_hand) / stock_required) * 100.0
    }

    /// Delivery times rescaled across the whole column.
    ///
    /// `((max - time) / (max - min)) * 100`, so the fastest delivery maps to
    /// 100 and the slowest to 0.
    ///
    /// # Edge Cases
    /// - Empty column: Returns empty Vec
    /// - All times equal: Returns all zeros
    pub fn delivery_time_percentages(times: &[f64]) -> Vec<f64> {
        let (min, max) = times
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
                (lo.min(t), hi.max(t))
            });

        times
            .iter()
            .map(|&time| {
                if max == min {
                    0.0
                } else {
                    ((max - time) / (max - min)) * 100.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn supply_gap_half_missing() {
        assert_close(FeatureDeriver::supply_gap_percentage(50.0, 100.0), 50.0);
    }

    #[test]
    fn supply_gap_nothing_on_hand() {
        assert_close(FeatureDeriver::supply_gap_percentage(0.0, 40.0), 100.0);
    }

    #[test]
    fn supply_gap_overstocked_is_negative() {
        assert_close(FeatureDeriver::supply_gap_percentage(150.0, 100.0), -50.0);
    }

    #[test]
    fn supply_gap_zero_requirement_is_zero() {
        assert_eq!(FeatureDeriver::supply_gap_percentage(25.0, 0.0), 0.0);
        assert_eq!(FeatureDeriver::supply_gap_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn delivery_percentages_span_zero_to_hundred() {
        let pct = FeatureDeriver::delivery_time_percentages(&[2.0, 4.0, 10.0]);
        assert_close(pct[0], 100.0);
        assert_close(pct[1], 75.0);
        assert_close(pct[2], 0.0);
    }

    #[test]
    fn delivery_percentages_all_equal_are_zero() {
        let pct = FeatureDeriver::delivery_time_percentages(&[3.0, 3.0, 3.0]);
        assert_eq!(pct, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn delivery_percentages_single_alternative_is_zero() {
        assert_eq!(FeatureDeriver::delivery_time_percentages(&[7.0]), vec![0.0]);
    }

    #[test]
    fn delivery_percentages_empty_column() {
        assert!(FeatureDeriver::delivery_time_percentages(&[]).is_empty());
    }
}
