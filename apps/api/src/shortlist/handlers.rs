//! Axum route handlers for the Shortlist API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::score::CandidateScoreRow;
use crate::shortlist::service::{generate_shortlist, ShortlistRequest, ShortlistResponse};
use crate::shortlist::store::{get_job_scores, PgShortlistStore};
use crate::state::AppState;

const DEFAULT_SCORE_HISTORY: i64 = 50;
const MAX_SCORE_HISTORY: i64 = 500;

#[derive(Debug, Deserialize)]
pub struct ScoreHistoryQuery {
    pub limit: Option<i64>,
}

/// POST /api/v1/shortlist
///
/// Ranks the candidate pool against a job and returns the top N with a full
/// per-component explanation. Each returned entry is persisted as a score record.
pub async fn handle_shortlist(
    State(state): State<AppState>,
    Json(request): Json<ShortlistRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let store = PgShortlistStore::new(state.db.clone());
    let response = generate_shortlist(&store, &state.ranker, request).await?;
    Ok(Json(response))
}

/// GET /api/v1/jobs/:id/scores
///
/// Returns persisted score records for a job, newest first.
pub async fn handle_job_scores(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<ScoreHistoryQuery>,
) -> Result<Json<Vec<CandidateScoreRow>>, AppError> {
    let limit = params.limit.unwrap_or(DEFAULT_SCORE_HISTORY);
    if !(1..=MAX_SCORE_HISTORY).contains(&limit) {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_SCORE_HISTORY}"
        )));
    }

    let scores = get_job_scores(&state.db, job_id, limit).await?;
    Ok(Json(scores))
}
