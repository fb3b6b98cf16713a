//! TOPSIS pipeline - Runs the stages end to end over one decision problem.

use serde::Serialize;
use tracing::debug;

use super::{
    Alternative, CriteriaSpec, DecisionMatrix, DistanceCalculator, Distances, IdealSolver,
    IdealVectors, MalformedInput, Normalizer, RankedAlternative, ScoreRanker, Weighter,
};

/// Every intermediate product of one TOPSIS run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisAnalysis {
    pub normalized: DecisionMatrix,
    pub weighted: DecisionMatrix,
    pub ideals: IdealVectors,
    pub distances: Distances,
    /// Alternatives sorted by closeness, highest first.
    pub ranking: Vec<RankedAlternative>,
}

/// Entry point for ranking alternatives.
pub struct Topsis;

impl Topsis {
    /// Ranks alternatives and returns only the ordered scores.
    pub fn rank(
        alternatives: &[Alternative],
        criteria: &CriteriaSpec,
    ) -> Result<Vec<RankedAlternative>, MalformedInput> {
        Self::analyze(alternatives, criteria).map(|analysis| analysis.ranking)
    }

    /// Runs the full pipeline.
    ///
    /// # Algorithm
    /// matrix -> normalized -> weighted -> {positive, negative} ideals
    /// -> {dPlus, dMinus} -> closeness -> descending ranking
    pub fn analyze(
        alternatives: &[Alternative],
        criteria: &CriteriaSpec,
    ) -> Result<TopsisAnalysis, MalformedInput> {
        if alternatives.is_empty() {
            return Err(MalformedInput::NoAlternatives);
        }
        if let Some(alt) = alternatives
            .iter()
            .find(|a| a.criteria.len() != criteria.len())
        {
            return Err(MalformedInput::ArityMismatch {
                alternative: alt.name.clone(),
                expected: criteria.len(),
                actual: alt.criteria.len(),
            });
        }

        let matrix = DecisionMatrix::from_alternatives(alternatives)?;
        let normalized = Normalizer::normalize(&matrix);
        let weighted = Weighter::apply(&normalized, criteria.weights())?;
        let ideals = IdealSolver::solve(&weighted, criteria.kinds())?;
        let distances = DistanceCalculator::compute(&weighted, &ideals)?;

        let names: Vec<String> = alternatives.iter().map(|a| a.name.clone()).collect();
        let ranking = ScoreRanker::rank(&names, &distances)?;

        debug!(
            alternatives = alternatives.len(),
            criteria = criteria.len(),
            top = ranking.first().map(|r| r.name.as_str()).unwrap_or_default(),
            "Computed TOPSIS ranking"
        );

        Ok(TopsisAnalysis {
            normalized,
            weighted,
            ideals,
            distances,
            ranking,
        })
    }
}
