//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRow, JobStatus, JOB_COLUMNS};
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    fn new(page: i64, limit: i64, total_count: i64) -> Self {
        Self {
            page,
            limit,
            total_count,
            total_pages: (total_count + limit - 1) / limit,
            has_next: page * limit < total_count,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<JobRow>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub requirements: Value,
    pub location: Option<String>,
    #[serde(default = "default_remote_friendly")]
    pub remote_friendly: bool,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub skills_preferred: Vec<String>,
    pub timezone_preference: Option<String>,
    pub created_by: Option<String>,
}

fn default_remote_friendly() -> bool {
    true
}

impl CreateJobRequest {
    /// Rejects missing text fields and impossible numeric bands at write time.
    /// Scoring stays tolerant of legacy rows that slipped past these checks.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title cannot be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::Validation(
                "description cannot be empty".to_string(),
            ));
        }
        if self.requirements.is_null() {
            return Err(AppError::Validation("requirements are required".to_string()));
        }
        check_band("salary", self.salary_min, self.salary_max)?;
        check_band("experience", self.experience_min, self.experience_max)?;
        Ok(())
    }
}

fn check_band(name: &str, min: Option<i32>, max: Option<i32>) -> Result<(), AppError> {
    if min.is_some_and(|v| v < 0) || max.is_some_and(|v| v < 0) {
        return Err(AppError::Validation(format!(
            "{name} bounds cannot be negative"
        )));
    }
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(AppError::Validation(format!(
                "{name}_min ({min}) cannot exceed {name}_max ({max})"
            )));
        }
    }
    Ok(())
}

fn parse_pagination(query: &ListJobsQuery) -> Result<(i64, i64, JobStatus), AppError> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    if page < 1 || !(1..=MAX_PAGE_SIZE).contains(&limit) {
        return Err(AppError::Validation(
            "Invalid pagination parameters".to_string(),
        ));
    }
    let status = match query.status.as_deref() {
        Some(raw) => raw.parse::<JobStatus>().map_err(AppError::Validation)?,
        None => JobStatus::default(),
    };
    Ok((page, limit, status))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<ListJobsQuery>,
) -> Result<Json<ListJobsResponse>, AppError> {
    let (page, limit, status) = parse_pagination(&query)?;
    let offset = (page - 1) * limit;

    let sql = format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE status = $1 \
         ORDER BY created_at DESC NULLS LAST LIMIT $2 OFFSET $3"
    );
    let jobs = sqlx::query_as::<_, JobRow>(&sql)
        .bind(status.as_str())
        .bind(limit)
        .bind(offset)
        .fetch_all(&state.db)
        .await?;

    let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE status = $1")
        .bind(status.as_str())
        .fetch_one(&state.db)
        .await?;

    Ok(Json(ListJobsResponse {
        jobs,
        pagination: Pagination::new(page, limit, total_count),
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
    let job = sqlx::query_as::<_, JobRow>(&sql)
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    Ok(Json(job))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    req.validate()?;

    let sql = format!(
        "INSERT INTO jobs \
             (title, description, requirements, location, remote_friendly, \
              salary_min, salary_max, experience_min, experience_max, \
              skills_required, skills_preferred, timezone_preference, created_by, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING {JOB_COLUMNS}"
    );
    let job = sqlx::query_as::<_, JobRow>(&sql)
        .bind(req.title.trim())
        .bind(&req.description)
        .bind(&req.requirements)
        .bind(&req.location)
        .bind(req.remote_friendly)
        .bind(req.salary_min)
        .bind(req.salary_max)
        .bind(req.experience_min)
        .bind(req.experience_max)
        .bind(serde_json::json!(req.skills_required))
        .bind(serde_json::json!(req.skills_preferred))
        .bind(&req.timezone_preference)
        .bind(&req.created_by)
        .bind(JobStatus::Active.as_str())
        .fetch_one(&state.db)
        .await?;

    info!("Created job {} ({})", job.id, job.title);
    Ok((StatusCode::CREATED, Json(job)))
}
