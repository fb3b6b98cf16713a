//! Score Ranker - Closeness coefficients and the descending ranking.

use serde::{Deserialize, Serialize};

use super::{Distances, MalformedInput};

/// Closeness assigned when the two distances cannot be told apart.
///
/// Both distances are zero when the alternative sits on both ideals at once:
/// a single alternative, alternatives identical on every weighted criterion,
/// or every weight zero. Both are infinite only for weights near `f64::MAX`.
pub const DEGENERATE_CLOSENESS: f64 = 0.0;

/// One alternative's final score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub name: String,
    /// Closeness coefficient in [0, 1].
    pub score: f64,
}

impl RankedAlternative {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }

    /// Copy with the score rounded to `decimals` places for display.
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10_f64.powi(decimals as i32);
        Self {
            name: self.name.clone(),
            score: (self.score * factor).round() / factor,
        }
    }
}

pub struct ScoreRanker;

impl ScoreRanker {
    /// `d_minus / (d_minus + d_plus)`, always within `[0, 1]`.
    ///
    /// Both distances are divided by the larger one first, so the sum
    /// cannot overflow.
    ///
    /// # Edge Cases
    /// - Both distances 0: Returns [`DEGENERATE_CLOSENESS`]
    /// - Both infinite, or either NaN: Returns [`DEGENERATE_CLOSENESS`]
    /// - Only one infinite: 1.0 when it is `d_minus`, 0.0 when it is `d_plus`
    pub fn closeness(d_plus: f64, d_minus: f64) -> f64 {
        if d_plus.is_nan() || d_minus.is_nan() {
            return DEGENERATE_CLOSENESS;
        }
        match (d_plus.is_infinite(), d_minus.is_infinite()) {
            (true, true) => return DEGENERATE_CLOSENESS,
            (true, false) => return 0.0,
            (false, true) => return 1.0,
            (false, false) => {}
        }

        let scale = d_plus.max(d_minus);
        if scale == 0.0 {
            return DEGENERATE_CLOSENESS;
        }
        let (plus, minus) = (d_plus / scale, d_minus / scale);
        minus / (minus + plus)
    }

    /// Scores every alternative and sorts by score, highest first.
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank(names: &[String], distances: &Distances) -> Result<Vec<RankedAlternative>, MalformedInput> {
        if names.is_empty() {
            return Err(MalformedInput::NoAlternatives);
        }
        if names.len() != distances.to_positive.len() || names.len() != distances.to_negative.len() {
            return Err(MalformedInput::DistanceLengthMismatch {
                names: names.len(),
                to_positive: distances.to_positive.len(),
                to_negative: distances.to_negative.len(),
            });
        }

        let mut ranking: Vec<RankedAlternative> = names
            .iter()
            .zip(distances.to_positive.iter().zip(&distances.to_negative))
            .map(|(name, (&d_plus, &d_minus))| {
                RankedAlternative::new(name.clone(), Self::closeness(d_plus, d_minus))
            })
            .collect();

        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(ranking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn closeness_on_positive_ideal_is_one() {
        assert_eq!(ScoreRanker::closeness(0.0, 0.3), 1.0);
    }

    #[test]
    fn closeness_on_negative_ideal_is_zero() {
        assert_eq!(ScoreRanker::closeness(0.3, 0.0), 0.0);
    }

    #[test]
    fn closeness_midpoint_is_half() {
        assert_eq!(ScoreRanker::closeness(0.2, 0.2), 0.5);
    }

    #[test]
    fn closeness_with_both_distances_zero_uses_degenerate_value() {
        assert_eq!(ScoreRanker::closeness(0.0, 0.0), DEGENERATE_CLOSENESS);
        assert_eq!(DEGENERATE_CLOSENESS, 0.0);
    }

    #[test]
    fn closeness_does_not_overflow_near_f64_max() {
        let score = ScoreRanker::closeness(f64::MAX, f64::MAX);
        assert_eq!(score, 0.5);

        let score = ScoreRanker::closeness(f64::MAX / 3.0, f64::MAX);
        assert!((score - 0.75).abs() < 1e-12);
    }

    #[test]
    fn closeness_with_non_finite_distances_stays_in_range() {
        assert_eq!(ScoreRanker::closeness(f64::INFINITY, f64::INFINITY), DEGENERATE_CLOSENESS);
        assert_eq!(ScoreRanker::closeness(f64::NAN, 0.3), DEGENERATE_CLOSENESS);
        assert_eq!(ScoreRanker::closeness(f64::INFINITY, 0.3), 0.0);
        assert_eq!(ScoreRanker::closeness(0.3, f64::INFINITY), 1.0);
    }

    #[test]
    fn rank_sorts_descending() {
        let distances = Distances {
            to_positive: vec![0.3, 0.1, 0.2],
            to_negative: vec![0.1, 0.3, 0.2],
        };
        let ranking = ScoreRanker::rank(&names(&["low", "high", "mid"]), &distances).unwrap();

        let order: Vec<_> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
        assert!((ranking[0].score - 0.75).abs() < 1e-12);
        assert!((ranking[1].score - 0.5).abs() < 1e-12);
        assert!((ranking[2].score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn rank_keeps_input_order_on_ties() {
        let distances = Distances {
            to_positive: vec![0.2, 0.2, 0.0],
            to_negative: vec![0.2, 0.2, 0.4],
        };
        let ranking = ScoreRanker::rank(&names(&["first", "second", "best"]), &distances).unwrap();

        let order: Vec<_> = ranking.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(order, vec!["best", "first", "second"]);
    }

    #[test]
    fn rank_rejects_empty_input() {
        let distances = Distances {
            to_positive: vec![],
            to_negative: vec![],
        };
        assert_eq!(
            ScoreRanker::rank(&[], &distances),
            Err(MalformedInput::NoAlternatives)
        );
    }

    #[test]
    fn rank_rejects_mismatched_lengths() {
        let distances = Distances {
            to_positive: vec![0.1, 0.2],
            to_negative: vec![0.1],
        };
        assert_eq!(
            ScoreRanker::rank(&names(&["a", "b"]), &distances),
            Err(MalformedInput::DistanceLengthMismatch {
                names: 2,
                to_positive: 2,
                to_negative: 1
            })
        );
    }

    #[test]
    fn rounded_keeps_four_decimals() {
        let ranked = RankedAlternative::new("A", 0.123_456_7);
        assert_eq!(ranked.rounded(4).score, 0.1235);
        assert_eq!(ranked.rounded(0).score, 0.0);
        assert_eq!(ranked.rounded(4).name, "A");
    }
}
