use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted audit snapshot of one candidate's fit against one job.
/// Rows are append-only: written once per shortlist selection, never updated.
/// Sub-scores are stored as `real`, so they round-trip at f32 precision.
pub const SCORE_COLUMNS: &str = "id, resume_id, job_id, fit_score, skill_match_score, \
    experience_score, timezone_score, availability_score, salary_score, explanation, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateScoreRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub job_id: Uuid,
    pub fit_score: f32,
    pub skill_match_score: f32,
    pub experience_score: f32,
    pub timezone_score: f32,
    pub availability_score: f32,
    pub salary_score: f32,
    pub explanation: Option<Value>,
    pub created_at: Option<NaiveDateTime>,
}
