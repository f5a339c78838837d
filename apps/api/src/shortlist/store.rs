//! Persistence boundary for shortlisting: read jobs and the candidate pool,
//! append immutable scoring records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, CANDIDATE_COLUMNS};
use crate::models::job::{JobRow, JOB_COLUMNS};
use crate::models::score::{CandidateScoreRow, SCORE_COLUMNS};
use crate::scoring::ranker::RankedCandidate;

#[async_trait]
pub trait ShortlistStore: Send + Sync {
    async fn fetch_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError>;

    /// Candidates eligible for ranking. Excludes `not_looking`.
    async fn fetch_candidate_pool(&self) -> Result<Vec<CandidateRow>, AppError>;

    /// Appends one scoring record per ranked candidate, all stamped `scored_at`.
    async fn record_scores(
        &self,
        job_id: Uuid,
        ranked: &[RankedCandidate],
        scored_at: DateTime<Utc>,
    ) -> Result<(), AppError>;
}

pub struct PgShortlistStore {
    pool: PgPool,
}

impl PgShortlistStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortlistStore for PgShortlistStore {
    async fn fetch_job(&self, job_id: Uuid) -> Result<Option<JobRow>, AppError> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        Ok(sqlx::query_as::<_, JobRow>(&sql)
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn fetch_candidate_pool(&self) -> Result<Vec<CandidateRow>, AppError> {
        let sql = format!(
            "SELECT {CANDIDATE_COLUMNS} FROM resumes \
             WHERE availability_status IS DISTINCT FROM 'not_looking'"
        );
        Ok(sqlx::query_as::<_, CandidateRow>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn record_scores(
        &self,
        job_id: Uuid,
        ranked: &[RankedCandidate],
        scored_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        // Score columns are `real` and `created_at` is a naive UTC timestamp.
        let created_at = scored_at.naive_utc();
        let mut tx = self.pool.begin().await?;

        for entry in ranked {
            let fit = &entry.fit;
            let explanation = serde_json::to_value(&fit.explanation)
                .map_err(|e| AppError::Internal(e.into()))?;

            sqlx::query(
                r#"
                INSERT INTO candidate_scores
                    (resume_id, job_id, fit_score, skill_match_score, experience_score,
                     timezone_score, availability_score, salary_score, explanation, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                "#,
            )
            .bind(entry.candidate.id)
            .bind(job_id)
            .bind(fit.fit_score as f32)
            .bind(fit.skill_match_score as f32)
            .bind(fit.experience_score as f32)
            .bind(fit.timezone_score as f32)
            .bind(fit.availability_score as f32)
            .bind(fit.salary_score as f32)
            .bind(explanation)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Scoring records for a job, newest batch first, best fit first within a batch.
pub async fn get_job_scores(
    pool: &PgPool,
    job_id: Uuid,
    limit: i64,
) -> Result<Vec<CandidateScoreRow>, AppError> {
    let sql = format!(
        "SELECT {SCORE_COLUMNS} FROM candidate_scores \
         WHERE job_id = $1 \
         ORDER BY created_at DESC NULLS LAST, fit_score DESC \
         LIMIT $2"
    );
    Ok(sqlx::query_as::<_, CandidateScoreRow>(&sql)
        .bind(job_id)
        .bind(limit)
        .fetch_all(pool)
        .await?)
}
