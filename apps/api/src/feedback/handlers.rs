use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::feedback::{FeedbackType, RecruiterFeedbackRow, FEEDBACK_COLUMNS};
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub recruiter_id: String,
    pub feedback_type: String,
    pub relevance_rating: Option<i32>,
    pub notes: Option<String>,
}

impl FeedbackRequest {
    pub fn validate(&self) -> Result<FeedbackType, AppError> {
        if self.recruiter_id.trim().is_empty() {
            return Err(AppError::Validation(
                "recruiter_id cannot be empty".to_string(),
            ));
        }
        if let Some(rating) = self.relevance_rating {
            if !(1..=5).contains(&rating) {
                return Err(AppError::Validation(format!(
                    "relevance_rating must be between 1 and 5, got {rating}"
                )));
            }
        }
        self.feedback_type
            .parse::<FeedbackType>()
            .map_err(AppError::Validation)
    }
}

/// POST /api/v1/feedback
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<RecruiterFeedbackRow>), AppError> {
    let feedback_type = req.validate()?;

    let (job_exists, candidate_exists): (bool, bool) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1), EXISTS(SELECT 1 FROM resumes WHERE id = $2)",
    )
    .bind(req.job_id)
    .bind(req.candidate_id)
    .fetch_one(&state.db)
    .await?;

    if !job_exists {
        return Err(AppError::NotFound(format!("Job {} not found", req.job_id)));
    }
    if !candidate_exists {
        return Err(AppError::NotFound(format!(
            "Candidate {} not found",
            req.candidate_id
        )));
    }

    let sql = format!(
        "INSERT INTO recruiter_feedback \
             (job_id, resume_id, recruiter_id, feedback_type, relevance_rating, notes) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING {FEEDBACK_COLUMNS}"
    );
    let row = sqlx::query_as::<_, RecruiterFeedbackRow>(&sql)
        .bind(req.job_id)
        .bind(req.candidate_id)
        .bind(req.recruiter_id.trim())
        .bind(feedback_type.as_str())
        .bind(req.relevance_rating)
        .bind(&req.notes)
        .fetch_one(&state.db)
        .await?;

    info!(
        "Recorded {} feedback from {} on candidate {} for job {}",
        feedback_type.as_str(),
        row.recruiter_id,
        row.resume_id,
        row.job_id
    );
    Ok((StatusCode::CREATED, Json(row)))
}
