//! HTTP DTOs for ranking endpoints.
//!
//! Request bodies use the camelCase field names of the `/topsis` wire
//! contract. Ranked results reuse the domain type directly.

pub use crate::domain::topsis::RankedAlternative;

use serde::{Deserialize, Serialize};

use crate::application::handlers::{RankAlternativesCommand, RankRestockCommand, RawRestockInput};
use crate::domain::foundation::DomainError;
use crate::domain::topsis::Alternative;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One named row of criteria values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeDto {
    pub name: String,
    pub criteria: Vec<f64>,
}

/// Body of `POST /topsis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopsisRequest {
    pub alternatives: Vec<AlternativeDto>,
    pub weights: Vec<f64>,
    /// `"benefit"` or `"cost"` per criterion.
    pub criteria_type: Vec<String>,
}

impl From<TopsisRequest> for RankAlternativesCommand {
    fn from(request: TopsisRequest) -> Self {
        Self {
            alternatives: request
                .alternatives
                .into_iter()
                .map(|a| Alternative::new(a.name, a.criteria))
                .collect(),
            weights: request.weights,
            criteria_types: request.criteria_type,
        }
    }
}

/// Body of `POST /api/restock/rank`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRankRequest {
    /// Each candidate carries the eight raw restock fields in order.
    pub candidates: Vec<AlternativeDto>,
}

impl From<RestockRankRequest> for RankRestockCommand {
    fn from(request: RestockRankRequest) -> Self {
        Self {
            candidates: request
                .candidates
                .into_iter()
                .map(|c| RawRestockInput {
                    name: c.name,
                    criteria: c.criteria,
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `POST /api/restock/rank`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockRankResponse {
    pub results: Vec<RankedAlternative>,
    /// Labels of the derived criteria the scores were computed from.
    pub criteria: Vec<String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Carries a domain error's code, message, and details.
    pub fn from_domain(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
