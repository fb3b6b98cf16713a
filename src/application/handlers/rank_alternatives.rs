//! RankAlternativesHandler - Command handler for ranking arbitrary alternatives.

use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::topsis::{Alternative, CriteriaSpec, RankedAlternative, Topsis};

/// Command to rank alternatives against a caller-supplied criteria profile.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub alternatives: Vec<Alternative>,
    pub weights: Vec<f64>,
    /// Criterion kinds as wire labels (`"benefit"` / `"cost"`).
    pub criteria_types: Vec<String>,
}

/// Result of a successful ranking.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    /// Alternatives sorted by closeness, highest first. Scores are not rounded.
    pub ranking: Vec<RankedAlternative>,
}

/// Handler for ranking alternatives.
#[derive(Debug, Clone, Default)]
pub struct RankAlternativesHandler;

impl RankAlternativesHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankAlternativesResult, DomainError> {
        // 1. Parse and check the criteria profile
        let criteria = CriteriaSpec::parse(cmd.weights, &cmd.criteria_types)?;

        // 2. Rank
        let ranking = Topsis::rank(&cmd.alternatives, &criteria)?;

        debug!(
            alternatives = ranking.len(),
            criteria = criteria.len(),
            "Ranked alternatives"
        );

        Ok(RankAlternativesResult { ranking })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn command(criteria_types: &[&str]) -> RankAlternativesCommand {
        RankAlternativesCommand {
            alternatives: vec![
                Alternative::new("A", vec![4.0, 2.0]),
                Alternative::new("B", vec![2.0, 4.0]),
            ],
            weights: vec![0.5, 0.5],
            criteria_types: criteria_types.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn ranks_worked_example() {
        let result = RankAlternativesHandler::new()
            .handle(command(&["benefit", "cost"]))
            .unwrap();

        assert_eq!(result.ranking[0].name, "A");
        assert_eq!(result.ranking[1].name, "B");
    }

    #[test]
    fn unknown_criterion_type_is_malformed_input() {
        let err = RankAlternativesHandler::new()
            .handle(command(&["benefit", "loss"]))
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedInput);
        assert!(err.message.contains("'loss'"));
    }

    #[test]
    fn mismatched_weights_are_malformed_input() {
        let mut cmd = command(&["benefit", "cost"]);
        cmd.weights.push(0.1);

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedInput);
    }

    #[test]
    fn empty_alternatives_are_malformed_input() {
        let mut cmd = command(&["benefit", "cost"]);
        cmd.alternatives.clear();

        let err = RankAlternativesHandler::new().handle(cmd).unwrap_err();
        assert_eq!(err.code, ErrorCode::MalformedInput);
    }
}
