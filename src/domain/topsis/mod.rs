//! TOPSIS Module - Pure ranking of alternatives against weighted criteria.
//!
//! Technique for Order Preference by Similarity to Ideal Solution: each
//! alternative is scored by how close it sits to the best attainable vector
//! and how far from the worst.
//!
//! # Components
//!
//! - `FeatureDeriver` - Raw inputs to derived criteria (row and column passes)
//! - `Normalizer` - Euclidean normalization per column
//! - `Weighter` - Column scaling by criterion weight
//! - `IdealSolver` - Positive/negative ideal vectors by criterion kind
//! - `DistanceCalculator` - Distance of each alternative to each ideal
//! - `ScoreRanker` - Closeness coefficient and descending ranking
//! - `Topsis` - Runs the stages in order
//!
//! # Design Philosophy
//!
//! Every stage is a stateless function of its inputs. A run owns nothing
//! after it returns, so the same code serves a library call, a request
//! handler, or a batch job.

mod decision_matrix;
mod distance;
mod errors;
mod feature_deriver;
mod ideal_solver;
mod normalizer;
mod pipeline;
mod score_ranker;
mod weighter;

pub use decision_matrix::{
    Alternative, CriteriaSpec, CriteriaSpecBuilder, CriterionKind, DecisionMatrix,
};
pub use distance::{DistanceCalculator, Distances};
pub use errors::MalformedInput;
pub use feature_deriver::FeatureDeriver;
pub use ideal_solver::{IdealSolver, IdealVectors};
pub use normalizer::{Normalizer, ZERO_NORM_DIVISOR};
pub use pipeline::{Topsis, TopsisAnalysis};
pub use score_ranker::{RankedAlternative, ScoreRanker, DEGENERATE_CLOSENESS};
pub use weighter::Weighter;
