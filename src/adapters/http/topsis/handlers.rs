//! HTTP handlers for ranking endpoints.
//!
//! These handlers connect Axum routes to the application layer command handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info, warn};

use crate::application::handlers::{RankAlternativesHandler, RankRestockHandler};
use crate::config::RankingConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::restock::RESTOCK_CRITERIA_NAMES;

use super::dto::{ErrorResponse, RankedAlternative, RestockRankRequest, RestockRankResponse, TopsisRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Ranking API error that implements IntoResponse.
#[derive(Debug)]
pub enum TopsisApiError {
    /// Body could not be decoded into the request DTO.
    BadRequest(String),
    Domain(DomainError),
}

impl IntoResponse for TopsisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            TopsisApiError::BadRequest(msg) => {
                warn!(message = %msg, "Rejected undecodable ranking request");
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            TopsisApiError::Domain(err) => match err.code {
                ErrorCode::ValidationFailed | ErrorCode::MalformedInput => {
                    warn!(code = %err.code, message = %err.message, "Rejected ranking request");
                    (StatusCode::BAD_REQUEST, ErrorResponse::from_domain(&err))
                }
                ErrorCode::InternalError => {
                    error!(message = %err.message, "Ranking failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::internal("Ranking failed"),
                    )
                }
            },
        };
        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for TopsisApiError {
    fn from(error: DomainError) -> Self {
        TopsisApiError::Domain(error)
    }
}

impl From<JsonRejection> for TopsisApiError {
    fn from(rejection: JsonRejection) -> Self {
        TopsisApiError::BadRequest(rejection.body_text())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for ranking endpoints.
#[derive(Debug, Clone, Default)]
pub struct TopsisAppState {
    pub ranking: RankingConfig,
}

impl TopsisAppState {
    pub fn new(ranking: RankingConfig) -> Self {
        Self { ranking }
    }

    pub fn rank_alternatives_handler(&self) -> RankAlternativesHandler {
        RankAlternativesHandler::new()
    }

    pub fn rank_restock_handler(&self) -> RankRestockHandler {
        RankRestockHandler::new(self.ranking.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /topsis
///
/// Ranks caller-supplied alternatives. Scores are returned unrounded.
pub async fn rank_topsis(
    State(state): State<TopsisAppState>,
    payload: Result<Json<TopsisRequest>, JsonRejection>,
) -> Result<Json<Vec<RankedAlternative>>, TopsisApiError> {
    let Json(request) = payload?;
    let alternatives = request.alternatives.len();

    let handler = state.rank_alternatives_handler();
    let result = handler.handle(request.into())?;

    info!(alternatives, "Served TOPSIS ranking");

    Ok(Json(result.ranking))
}

/// POST /api/restock/rank
///
/// Ranks restock candidates entered with the eight raw restock fields.
pub async fn rank_restock(
    State(state): State<TopsisAppState>,
    payload: Result<Json<RestockRankRequest>, JsonRejection>,
) -> Result<Json<RestockRankResponse>, TopsisApiError> {
    let Json(request) = payload?;
    let candidates = request.candidates.len();

    let handler = state.rank_restock_handler();
    let result = handler.handle(request.into())?;

    info!(candidates, "Served restock ranking");

    Ok(Json(RestockRankResponse {
        results: result.ranking,
        criteria: RESTOCK_CRITERIA_NAMES.iter().map(|s| s.to_string()).collect(),
    }))
}
