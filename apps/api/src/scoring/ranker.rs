//! Ranker — scores a candidate pool against one job and keeps the top N.
//!
//! Skill-match calls are driven through a bounded stream so at most
//! `concurrency` external calls are in flight per ranking. The futures are owned
//! by the caller's future: dropping it abandons in-flight calls.

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, info};

use crate::models::candidate::CandidateRow;
use crate::scoring::aggregator::{compute_fit, FitResult};
use crate::scoring::profile::{CandidateProfile, JobProfile};
use crate::scoring::skills::{SkillMatchInput, SkillScoreSource, SkillScorer};
use crate::scoring::weights::ScoringWeights;

pub const DEFAULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateRow,
    pub fit: FitResult,
}

#[derive(Clone)]
pub struct Ranker {
    skill_scorer: SkillScorer,
    concurrency: usize,
}

impl Ranker {
    pub fn new(skill_scorer: SkillScorer, concurrency: usize) -> Self {
        Self {
            skill_scorer,
            concurrency: concurrency.max(1),
        }
    }

    pub fn skill_scorer(&self) -> &SkillScorer {
        &self.skill_scorer
    }

    /// Scores every candidate, sorts by fit descending (ties by candidate id
    /// ascending) and truncates to `limit`.
    pub async fn rank(
        &self,
        job: &JobProfile,
        pool: Vec<CandidateRow>,
        weights: &ScoringWeights,
        limit: usize,
    ) -> Vec<RankedCandidate> {
        let pool_size = pool.len();

        let scored: Vec<RankedCandidate> = stream::iter(pool)
            .map(|row| self.score_candidate(job, row, weights))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        let fallbacks = scored
            .iter()
            .filter(|r| r.fit.skill_match_source == SkillScoreSource::KeywordFallback)
            .count();
        info!(
            job_id = %job.id,
            pool_size,
            fallbacks,
            "Scored candidate pool"
        );

        sort_and_truncate(scored, limit)
    }

    async fn score_candidate(
        &self,
        job: &JobProfile,
        row: CandidateRow,
        weights: &ScoringWeights,
    ) -> RankedCandidate {
        let profile = CandidateProfile::from(&row);
        let input = SkillMatchInput {
            candidate_skills: &profile.skills,
            resume_excerpt: profile.resume_excerpt(),
            required_skills: &job.required_skills,
            preferred_skills: &job.preferred_skills,
        };

        let skill = self.skill_scorer.assess(profile.id, &input).await;
        let fit = compute_fit(&profile, job, weights, skill);
        debug!(candidate_id = %profile.id, fit_score = fit.fit_score, "Candidate scored");

        RankedCandidate {
            candidate: row,
            fit,
        }
    }
}

fn sort_and_truncate(mut scored: Vec<RankedCandidate>, limit: usize) -> Vec<RankedCandidate> {
    scored.sort_by(|a, b| {
        b.fit
            .fit_score
            .total_cmp(&a.fit.fit_score)
            .then_with(|| a.candidate.id.cmp(&b.candidate.id))
    });
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::json;
    use uuid::Uuid;

    use crate::scoring::profile::SalaryRange;
    use crate::scoring::skills::{SkillBackend, SkillMatchError, SkillMatcher};

    fn candidate(id: Uuid, skills: &[&str], years: i32, status: &str) -> CandidateRow {
        CandidateRow {
            id,
            name: format!("candidate-{id}"),
            location: None,
            raw_text: "Resume".to_string(),
            pdf_url: None,
            skills: Some(json!(skills)),
            experience_years: Some(years),
            availability_status: Some(status.to_string()),
            timezone: None,
            preferred_salary_min: None,
            preferred_salary_max: None,
        }
    }

    fn job() -> JobProfile {
        JobProfile {
            id: Uuid::new_v4(),
            required_skills: vec!["Rust".to_string(), "SQL".to_string()],
            preferred_skills: vec![],
            experience_min: Some(2.0),
            experience_max: Some(6.0),
            timezone_preference: None,
            salary: SalaryRange::default(),
        }
    }

    /// Fails for any candidate listing the skill "flaky".
    struct FlakyMatcher;

    #[async_trait]
    impl SkillMatcher for FlakyMatcher {
        fn backend(&self) -> SkillBackend {
            SkillBackend::Llm
        }

        async fn score(&self, input: &SkillMatchInput<'_>) -> Result<f64, SkillMatchError> {
            if input.candidate_skills.iter().any(|s| s == "flaky") {
                return Err(SkillMatchError::Unparseable("upstream 503".to_string()));
            }
            Ok(0.9)
        }
    }

    /// Records the peak number of concurrent calls.
    struct CountingMatcher {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl SkillMatcher for CountingMatcher {
        fn backend(&self) -> SkillBackend {
            SkillBackend::Llm
        }

        async fn score(&self, _input: &SkillMatchInput<'_>) -> Result<f64, SkillMatchError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(0.5)
        }
    }

    fn ids(n: u128) -> Vec<Uuid> {
        (1..=n).map(Uuid::from_u128).collect()
    }

    #[tokio::test]
    async fn test_ranking_orders_by_fit_descending() {
        let ranker = Ranker::new(SkillScorer::keyword_only(), 4);
        let id = ids(5);
        let pool = vec![
            candidate(id[0], &[], 0, "not_looking"),
            candidate(id[1], &["Rust", "SQL"], 4, "actively_looking"),
            candidate(id[2], &["Rust"], 4, "open"),
            candidate(id[3], &["Rust", "SQL"], 1, "open"),
            candidate(id[4], &["SQL"], 3, "unknown"),
        ];

        let ranked = ranker
            .rank(&job(), pool, &ScoringWeights::default(), 10)
            .await;

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].candidate.id, id[1]);
        assert_eq!(ranked[4].candidate.id, id[0]);
        for pair in ranked.windows(2) {
            assert!(pair[0].fit.fit_score >= pair[1].fit.fit_score);
        }
    }

    #[tokio::test]
    async fn test_ranking_truncates_to_limit() {
        let ranker = Ranker::new(SkillScorer::keyword_only(), 2);
        let pool = ids(7)
            .into_iter()
            .map(|id| candidate(id, &["Rust"], 3, "open"))
            .collect();

        let ranked = ranker.rank(&job(), pool, &ScoringWeights::default(), 3).await;
        assert_eq!(ranked.len(), 3);
    }

    #[tokio::test]
    async fn test_ties_break_by_candidate_id_ascending() {
        let ranker = Ranker::new(SkillScorer::keyword_only(), 3);
        let id = ids(3);
        let pool = vec![
            candidate(id[2], &["Rust"], 3, "open"),
            candidate(id[0], &["Rust"], 3, "open"),
            candidate(id[1], &["Rust"], 3, "open"),
        ];

        let ranked = ranker.rank(&job(), pool, &ScoringWeights::default(), 10).await;
        let order: Vec<Uuid> = ranked.iter().map(|r| r.candidate.id).collect();
        assert_eq!(order, id);
    }

    #[tokio::test]
    async fn test_single_ai_failure_falls_back_for_that_candidate_only() {
        let scorer = SkillScorer::new(Arc::new(FlakyMatcher), Duration::from_secs(5));
        let ranker = Ranker::new(scorer, 4);
        let id = ids(4);
        let pool = vec![
            candidate(id[0], &["Rust", "SQL"], 4, "open"),
            candidate(id[1], &["flaky", "Rust"], 4, "open"),
            candidate(id[2], &["Go"], 4, "open"),
            candidate(id[3], &["SQL"], 4, "open"),
        ];

        let ranked = ranker.rank(&job(), pool, &ScoringWeights::default(), 10).await;
        assert_eq!(ranked.len(), 4);

        let flaky = ranked.iter().find(|r| r.candidate.id == id[1]).unwrap();
        assert_eq!(flaky.fit.skill_match_source, SkillScoreSource::KeywordFallback);
        // "Rust" matched 1 of 2 required skills
        assert_eq!(flaky.fit.skill_match_score, 0.5);

        for other in ranked.iter().filter(|r| r.candidate.id != id[1]) {
            assert_eq!(other.fit.skill_match_source, SkillScoreSource::Llm);
            assert_eq!(other.fit.skill_match_score, 0.9);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_skill_calls_respect_concurrency_bound() {
        let matcher = Arc::new(CountingMatcher {
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        });
        let scorer = SkillScorer::new(matcher.clone(), Duration::from_secs(5));
        let ranker = Ranker::new(scorer, 3);
        let pool = ids(10)
            .into_iter()
            .map(|id| candidate(id, &["Rust"], 3, "open"))
            .collect();

        let ranked = ranker.rank(&job(), pool, &ScoringWeights::default(), 10).await;
        assert_eq!(ranked.len(), 10);
        let peak = matcher.peak.load(Ordering::SeqCst);
        assert!(peak <= 3, "peak concurrency was {peak}");
        assert!(peak >= 2, "calls should overlap, peak was {peak}");
    }

    #[tokio::test]
    async fn test_empty_pool_ranks_nothing() {
        let ranker = Ranker::new(SkillScorer::keyword_only(), 4);
        let ranked = ranker
            .rank(&job(), vec![], &ScoringWeights::default(), 10)
            .await;
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_zero_concurrency_is_raised_to_one() {
        let ranker = Ranker::new(SkillScorer::keyword_only(), 0);
        assert_eq!(ranker.concurrency, 1);
    }
}
