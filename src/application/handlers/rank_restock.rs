//! RankRestockHandler - Command handler for ranking restock candidates.

use tracing::debug;

use crate::config::RankingConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::restock::{RestockCandidate, RestockProfile};
use crate::domain::topsis::{RankedAlternative, Topsis};

/// One candidate as entered: a name and the eight raw fields.
#[derive(Debug, Clone)]
pub struct RawRestockInput {
    pub name: String,
    pub criteria: Vec<f64>,
}

/// Command to rank restock candidates with the restock profile.
#[derive(Debug, Clone)]
pub struct RankRestockCommand {
    pub candidates: Vec<RawRestockInput>,
}

/// Result of a successful restock ranking.
#[derive(Debug, Clone)]
pub struct RankRestockResult {
    /// Candidates sorted by closeness, scores rounded to the configured decimals.
    pub ranking: Vec<RankedAlternative>,
}

/// Handler for ranking restock candidates.
#[derive(Debug, Clone, Default)]
pub struct RankRestockHandler {
    config: RankingConfig,
}

impl RankRestockHandler {
    pub fn new(config: RankingConfig) -> Self {
        Self { config }
    }

    pub fn handle(&self, cmd: RankRestockCommand) -> Result<RankRestockResult, DomainError> {
        if cmd.candidates.is_empty() {
            return Err(DomainError::validation(
                "candidates",
                "At least one restock candidate is required",
            ));
        }

        // 1. Validate every candidate before deriving anything
        let candidates = cmd
            .candidates
            .iter()
            .enumerate()
            .map(|(index, input)| {
                RestockCandidate::from_raw(&input.name, &input.criteria).map_err(|err| {
                    DomainError::from(err).with_detail("candidate", index.to_string())
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // 2. Derive the scored criteria from the complete candidate list
        let alternatives = RestockProfile::derive(&candidates, self.config.delivery_time);

        // 3. Rank and shape output
        let criteria = RestockProfile::criteria_spec().map_err(|err| {
            DomainError::new(ErrorCode::InternalError, format!("Restock profile is invalid: {}", err))
        })?;
        let ranking = Topsis::rank(&alternatives, &criteria)?
            .iter()
            .map(|r| r.rounded(self.config.score_decimals))
            .collect::<Vec<_>>();

        debug!(
            candidates = ranking.len(),
            delivery_time = ?self.config.delivery_time,
            "Ranked restock candidates"
        );

        Ok(RankRestockResult { ranking })
    }
}
