//! Skill Match — pluggable, trait-based scorer for candidate skills vs job skills.
//!
//! Backends:
//! - `KeywordSkillMatcher`: deterministic substring overlap, never fails.
//! - `LlmSkillMatcher`: semantic rating via Claude, may fail or time out.
//!
//! `SkillScorer` wraps a primary backend with a per-call timeout and falls back to
//! keyword overlap on any failure, so skill scoring never fails a ranking.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use crate::llm_client::{CallOptions, LlmClient, LlmError};
use crate::scoring::prompts::{render_skill_match_prompt, skill_match_system};

/// Units credited for a matched preferred skill (a required skill is 1 unit).
const PREFERRED_SKILL_UNITS: f64 = 0.5;

/// LLM call budget for a bare decimal reply.
const SKILL_MATCH_CALL: CallOptions = CallOptions {
    max_tokens: 10,
    temperature: 0.1,
};

// ────────────────────────────────────────────────────────────────────────────
// Inputs, outputs, errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct SkillMatchInput<'a> {
    pub candidate_skills: &'a [String],
    pub resume_excerpt: &'a str,
    pub required_skills: &'a [String],
    pub preferred_skills: &'a [String],
}

#[derive(Debug, Error)]
pub enum SkillMatchError {
    #[error("LLM call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Unparseable skill score: {0:?}")]
    Unparseable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillBackend {
    Llm,
    Keyword,
}

/// Where a skill sub-score actually came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillScoreSource {
    Llm,
    Keyword,
    /// Primary backend failed or timed out; keyword overlap was used instead.
    KeywordFallback,
}

/// Keyword hit counts, kept for the explanation regardless of backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordOverlap {
    pub matched_required: usize,
    pub total_required: usize,
    pub matched_preferred: usize,
    pub total_preferred: usize,
}

impl KeywordOverlap {
    pub fn compute(input: &SkillMatchInput<'_>) -> Self {
        let candidate: Vec<String> = input
            .candidate_skills
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let count_matches = |skills: &[String]| {
            skills
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|skill| !skill.is_empty() && skill_covered(&candidate, skill))
                .count()
        };

        Self {
            matched_required: count_matches(input.required_skills),
            total_required: input.required_skills.len(),
            matched_preferred: count_matches(input.preferred_skills),
            total_preferred: input.preferred_skills.len(),
        }
    }

    /// matched units / possible units, or a neutral 0.5 when the job lists no skills.
    pub fn score(&self) -> f64 {
        let total =
            self.total_required as f64 + self.total_preferred as f64 * PREFERRED_SKILL_UNITS;
        if total <= 0.0 {
            return 0.5;
        }
        let matched =
            self.matched_required as f64 + self.matched_preferred as f64 * PREFERRED_SKILL_UNITS;
        (matched / total).clamp(0.0, 1.0)
    }
}

/// Case-insensitive containment in either direction ("react" ~ "react native").
fn skill_covered(candidate_skills: &[String], skill: &str) -> bool {
    candidate_skills
        .iter()
        .any(|cs| cs.contains(skill) || skill.contains(cs.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkillAssessment {
    pub score: f64,
    pub source: SkillScoreSource,
    pub overlap: KeywordOverlap,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The skill matcher trait. Implement this to swap backends without touching the
/// ranker or handlers. Implementations return a score in [0, 1].
#[async_trait]
pub trait SkillMatcher: Send + Sync {
    fn backend(&self) -> SkillBackend;

    async fn score(&self, input: &SkillMatchInput<'_>) -> Result<f64, SkillMatchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillMatcher — deterministic backend
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordSkillMatcher;

#[async_trait]
impl SkillMatcher for KeywordSkillMatcher {
    fn backend(&self) -> SkillBackend {
        SkillBackend::Keyword
    }

    async fn score(&self, input: &SkillMatchInput<'_>) -> Result<f64, SkillMatchError> {
        Ok(KeywordOverlap::compute(input).score())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillMatcher — semantic backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillMatcher {
    llm: LlmClient,
    system: String,
}

impl LlmSkillMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            system: skill_match_system(),
        }
    }
}

#[async_trait]
impl SkillMatcher for LlmSkillMatcher {
    fn backend(&self) -> SkillBackend {
        SkillBackend::Llm
    }

    async fn score(&self, input: &SkillMatchInput<'_>) -> Result<f64, SkillMatchError> {
        let prompt = render_skill_match_prompt(input);
        let reply = self
            .llm
            .call_text(&prompt, &self.system, SKILL_MATCH_CALL)
            .await?;
        parse_skill_score(&reply)
    }
}

/// Strict parse of an untrusted model reply: one finite number, clamped to [0, 1].
pub fn parse_skill_score(reply: &str) -> Result<f64, SkillMatchError> {
    let trimmed = reply.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v.clamp(0.0, 1.0)),
        _ => Err(SkillMatchError::Unparseable(trimmed.chars().take(64).collect())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// SkillScorer — primary backend + timeout + keyword fallback
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct SkillScorer {
    primary: Arc<dyn SkillMatcher>,
    timeout: Duration,
}

impl SkillScorer {
    pub fn new(primary: Arc<dyn SkillMatcher>, timeout: Duration) -> Self {
        Self { primary, timeout }
    }

    pub fn keyword_only() -> Self {
        Self::new(Arc::new(KeywordSkillMatcher), Duration::from_secs(1))
    }

    pub fn backend(&self) -> SkillBackend {
        self.primary.backend()
    }

    /// Scores one candidate. Never fails: any primary error, timeout or non-finite
    /// value degrades to keyword overlap for this candidate only.
    pub async fn assess(&self, candidate_id: Uuid, input: &SkillMatchInput<'_>) -> SkillAssessment {
        let overlap = KeywordOverlap::compute(input);
        let primary_source = match self.primary.backend() {
            SkillBackend::Llm => SkillScoreSource::Llm,
            SkillBackend::Keyword => SkillScoreSource::Keyword,
        };

        let outcome = tokio::time::timeout(self.timeout, self.primary.score(input)).await;
        let score = match outcome {
            Ok(Ok(score)) if score.is_finite() => {
                return SkillAssessment {
                    score: score.clamp(0.0, 1.0),
                    source: primary_source,
                    overlap,
                };
            }
            Ok(Ok(score)) => {
                warn!(%candidate_id, "Skill matcher returned non-finite score {score}, using keyword fallback");
                overlap.score()
            }
            Ok(Err(e)) => {
                warn!(%candidate_id, "Skill matcher failed, using keyword fallback: {e}");
                overlap.score()
            }
            Err(_) => {
                warn!(
                    %candidate_id,
                    "Skill matcher timed out after {}ms, using keyword fallback",
                    self.timeout.as_millis()
                );
                overlap.score()
            }
        };

        SkillAssessment {
            score,
            source: SkillScoreSource::KeywordFallback,
            overlap,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
