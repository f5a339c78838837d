//! Shortlist generation — orchestrates a ranking request end to end.
//!
//! Flow: validate → fetch job → fetch candidate pool → rank → persist top N →
//!       build response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::AvailabilityStatus;
use crate::scoring::aggregator::Explanation;
use crate::scoring::profile::JobProfile;
use crate::scoring::ranker::{RankedCandidate, Ranker, DEFAULT_LIMIT};
use crate::scoring::skills::{SkillBackend, SkillScoreSource};
use crate::scoring::weights::ScoringWeights;
use crate::shortlist::store::ShortlistStore;

pub const MAX_LIMIT: usize = 100;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ShortlistRequest {
    pub job_id: Uuid,
    #[serde(default)]
    pub weights: ScoringWeights,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub requirements: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistEntry {
    pub candidate_id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub fit_score: f64,
    /// `fit_score` × 100, rounded, for display.
    pub fit_percent: i64,
    pub skill_match_score: f64,
    pub experience_score: f64,
    pub timezone_score: f64,
    pub availability_score: f64,
    pub salary_score: f64,
    pub skill_match_source: SkillScoreSource,
    pub explanation: Explanation,
    pub availability_status: AvailabilityStatus,
    pub skills: Vec<String>,
    pub experience_years: Option<i32>,
    pub pdf_url: Option<String>,
}

impl From<RankedCandidate> for ShortlistEntry {
    fn from(ranked: RankedCandidate) -> Self {
        let RankedCandidate { candidate, fit } = ranked;
        Self {
            candidate_id: candidate.id,
            fit_percent: (fit.fit_score * 100.0).round() as i64,
            fit_score: fit.fit_score,
            skill_match_score: fit.skill_match_score,
            experience_score: fit.experience_score,
            timezone_score: fit.timezone_score,
            availability_score: fit.availability_score,
            salary_score: fit.salary_score,
            skill_match_source: fit.skill_match_source,
            explanation: fit.explanation,
            availability_status: candidate.availability(),
            skills: candidate.skill_list(),
            experience_years: candidate.experience_years,
            name: candidate.name,
            location: candidate.location,
            pdf_url: candidate.pdf_url,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistResponse {
    pub job: JobSummary,
    pub weights: ScoringWeights,
    pub skill_match_backend: SkillBackend,
    pub pool_size: usize,
    pub scored_at: DateTime<Utc>,
    pub shortlist: Vec<ShortlistEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

pub fn validate_limit(limit: Option<usize>) -> Result<usize, AppError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 || limit > MAX_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

/// Runs a ranking request and persists the retained score records.
///
/// A missing job is a `NotFound`; skill-match failures never surface here.
pub async fn generate_shortlist(
    store: &dyn ShortlistStore,
    ranker: &Ranker,
    request: ShortlistRequest,
) -> Result<ShortlistResponse, AppError> {
    request.weights.validate()?;
    let limit = validate_limit(request.limit)?;
    if !request.weights.is_normalized() {
        debug!(
            "Weights sum to {:.3}; fit scores are not bounded to [0, 1]",
            request.weights.sum()
        );
    }

    let job = store
        .fetch_job(request.job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    let pool = store.fetch_candidate_pool().await?;
    let pool_size = pool.len();
    info!(
        "Ranking {pool_size} candidates for job {} (limit {limit})",
        job.id
    );

    let profile = JobProfile::from(&job);
    let ranked = ranker.rank(&profile, pool, &request.weights, limit).await;

    let scored_at = Utc::now();
    store.record_scores(job.id, &ranked, scored_at).await?;
    info!("Recorded {} score records for job {}", ranked.len(), job.id);

    Ok(ShortlistResponse {
        job: JobSummary {
            id: job.id,
            title: job.title,
            requirements: job.requirements,
        },
        weights: request.weights,
        skill_match_backend: ranker.skill_scorer().backend(),
        pool_size,
        scored_at,
        shortlist: ranked.into_iter().map(ShortlistEntry::from).collect(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
