//! Composite Aggregator — combines the five sub-scores into one fit score plus an
//! itemized, user-auditable explanation.
//!
//! fit_score = Σ sub_score × weight, with no renormalization of the weights.
//! Everything here is deterministic; the only non-deterministic input is the skill
//! assessment, which arrives already computed.

use serde::{Deserialize, Serialize};

use crate::scoring::availability::score_availability;
use crate::scoring::experience::score_experience;
use crate::scoring::profile::{CandidateProfile, JobProfile, SalaryRange};
use crate::scoring::salary::score_salary;
use crate::scoring::skills::{SkillAssessment, SkillScoreSource};
use crate::scoring::timezone::score_timezone;
use crate::scoring::weights::ScoringWeights;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
    pub details: String,
}

impl ScoreComponent {
    fn new(score: f64, weight: f64, details: String) -> Self {
        Self {
            score,
            weight,
            contribution: score * weight,
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub skill_match: ScoreComponent,
    pub experience: ScoreComponent,
    pub timezone: ScoreComponent,
    pub availability: ScoreComponent,
    pub salary: ScoreComponent,
}

impl Explanation {
    pub fn components(&self) -> [&ScoreComponent; 5] {
        [
            &self.skill_match,
            &self.experience,
            &self.timezone,
            &self.availability,
            &self.salary,
        ]
    }
}

/// Full fit result for one (candidate, job, weights) triple. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub fit_score: f64,
    pub skill_match_score: f64,
    pub experience_score: f64,
    pub timezone_score: f64,
    pub availability_score: f64,
    pub salary_score: f64,
    pub skill_match_source: SkillScoreSource,
    pub explanation: Explanation,
}

/// Builds the fit result from an already-computed skill assessment.
pub fn compute_fit(
    candidate: &CandidateProfile,
    job: &JobProfile,
    weights: &ScoringWeights,
    skill: SkillAssessment,
) -> FitResult {
    let skill_score = skill.score.clamp(0.0, 1.0);
    let experience_score =
        score_experience(candidate.experience_years, job.experience_min, job.experience_max);
    let timezone_score = score_timezone(
        candidate.timezone.as_deref(),
        job.timezone_preference.as_deref(),
    );
    let availability_score = score_availability(candidate.availability);
    let salary_score = score_salary(candidate.salary, job.salary);

    let explanation = Explanation {
        skill_match: ScoreComponent::new(skill_score, weights.skills, skill_details(&skill)),
        experience: ScoreComponent::new(
            experience_score,
            weights.experience,
            experience_details(candidate, job),
        ),
        timezone: ScoreComponent::new(
            timezone_score,
            weights.timezone,
            timezone_details(candidate, job),
        ),
        availability: ScoreComponent::new(
            availability_score,
            weights.availability,
            format!("Status: {}", candidate.availability.as_str()),
        ),
        salary: ScoreComponent::new(
            salary_score,
            weights.salary,
            salary_details(candidate.salary, job.salary),
        ),
    };

    let fit_score = explanation.components().iter().map(|c| c.contribution).sum();

    FitResult {
        fit_score,
        skill_match_score: skill_score,
        experience_score,
        timezone_score,
        availability_score,
        salary_score,
        skill_match_source: skill.source,
        explanation,
    }
}

fn skill_details(skill: &SkillAssessment) -> String {
    let o = &skill.overlap;
    let hits = format!(
        "{}/{} required and {}/{} preferred skills matched by keyword",
        o.matched_required, o.total_required, o.matched_preferred, o.total_preferred
    );
    match skill.source {
        SkillScoreSource::Llm => format!("AI-assessed skill match; {hits}"),
        SkillScoreSource::Keyword => format!("Keyword skill match; {hits}"),
        SkillScoreSource::KeywordFallback => {
            format!("Keyword skill match (AI assessment unavailable); {hits}")
        }
    }
}

fn experience_details(candidate: &CandidateProfile, job: &JobProfile) -> String {
    let years = match candidate.experience_years {
        Some(y) => format!("{} years", fmt_number(y)),
        None => "Unknown experience".to_string(),
    };
    let min = fmt_number(job.experience_min.unwrap_or(0.0).max(0.0));
    let band = match job.experience_max {
        Some(max) => format!("{min}-{} years required", fmt_number(max)),
        None => format!("{min}+ years required"),
    };
    format!("{years} vs {band}")
}

fn timezone_details(candidate: &CandidateProfile, job: &JobProfile) -> String {
    format!(
        "Candidate timezone: {}; job preference: {}",
        candidate.timezone.as_deref().unwrap_or("Unknown"),
        job.timezone_preference.as_deref().unwrap_or("Any"),
    )
}

fn salary_details(candidate: SalaryRange, job: SalaryRange) -> String {
    format!(
        "Candidate expects {}; job offers {}",
        fmt_range(candidate),
        fmt_range(job)
    )
}

fn fmt_range(range: SalaryRange) -> String {
    match (range.min, range.max) {
        (Some(min), Some(max)) => format!("{}-{}", fmt_number(min), fmt_number(max)),
        (Some(min), None) => format!("{}+", fmt_number(min)),
        (None, Some(max)) => format!("up to {}", fmt_number(max)),
        (None, None) => "unspecified".to_string(),
    }
}

/// Whole numbers print without a trailing ".0".
fn fmt_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::AvailabilityStatus;
    use crate::scoring::skills::KeywordOverlap;
    use uuid::Uuid;

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            id: Uuid::new_v4(),
            skills: vec!["Rust".to_string()],
            experience_years: Some(5.0),
            timezone: Some("America/New_York".to_string()),
            availability: AvailabilityStatus::Open,
            salary: SalaryRange {
                min: Some(90_000.0),
                max: Some(120_000.0),
            },
            resume_text: String::new(),
        }
    }

    fn job() -> JobProfile {
        JobProfile {
            id: Uuid::new_v4(),
            required_skills: vec!["Rust".to_string()],
            preferred_skills: vec![],
            experience_min: Some(3.0),
            experience_max: Some(8.0),
            timezone_preference: Some("Europe".to_string()),
            salary: SalaryRange {
                min: Some(100_000.0),
                max: Some(140_000.0),
            },
        }
    }

    fn skill(score: f64, source: SkillScoreSource) -> SkillAssessment {
        SkillAssessment {
            score,
            source,
            overlap: KeywordOverlap {
                matched_required: 1,
                total_required: 1,
                matched_preferred: 0,
                total_preferred: 0,
            },
        }
    }

    #[test]
    fn test_fit_is_plain_weighted_sum() {
        let weights = ScoringWeights::default();
        let result = compute_fit(&candidate(), &job(), &weights, skill(0.8, SkillScoreSource::Llm));

        // 0.8*0.4 + 1.0*0.25 + 0.3*0.15 + 0.7*0.1 + 1.0*0.1
        let expected = 0.32 + 0.25 + 0.045 + 0.07 + 0.1;
        assert!((result.fit_score - expected).abs() < 1e-9, "{}", result.fit_score);
        assert_eq!(result.experience_score, 1.0);
        assert_eq!(result.timezone_score, 0.3);
        assert_eq!(result.availability_score, 0.7);
        assert_eq!(result.salary_score, 1.0);
    }

    #[test]
    fn test_weights_are_not_renormalized() {
        let weights = ScoringWeights {
            skills: 1.0,
            experience: 1.0,
            timezone: 1.0,
            availability: 1.0,
            salary: 1.0,
        };
        let result = compute_fit(&candidate(), &job(), &weights, skill(1.0, SkillScoreSource::Llm));
        let sum = result.skill_match_score
            + result.experience_score
            + result.timezone_score
            + result.availability_score
            + result.salary_score;
        assert!((result.fit_score - sum).abs() < 1e-9);
        assert!(result.fit_score > 1.0);
    }

    #[test]
    fn test_zero_weights_give_zero_fit() {
        let weights = ScoringWeights {
            skills: 0.0,
            experience: 0.0,
            timezone: 0.0,
            availability: 0.0,
            salary: 0.0,
        };
        let result = compute_fit(&candidate(), &job(), &weights, skill(1.0, SkillScoreSource::Llm));
        assert_eq!(result.fit_score, 0.0);
    }

    #[test]
    fn test_contribution_is_score_times_weight() {
        let weights = ScoringWeights::default();
        let result = compute_fit(&candidate(), &job(), &weights, skill(0.6, SkillScoreSource::Llm));
        for component in result.explanation.components() {
            assert!((component.contribution - component.score * component.weight).abs() < 1e-12);
        }
    }

    #[test]
    fn test_deterministic_components_are_reproducible() {
        let weights = ScoringWeights::default();
        let c = candidate();
        let j = job();
        let a = compute_fit(&c, &j, &weights, skill(0.2, SkillScoreSource::Llm));
        let b = compute_fit(&c, &j, &weights, skill(0.9, SkillScoreSource::Llm));
        assert_eq!(a.explanation.experience, b.explanation.experience);
        assert_eq!(a.explanation.timezone, b.explanation.timezone);
        assert_eq!(a.explanation.availability, b.explanation.availability);
        assert_eq!(a.explanation.salary, b.explanation.salary);
        assert_eq!(a, compute_fit(&c, &j, &weights, skill(0.2, SkillScoreSource::Llm)));
    }

    #[test]
    fn test_explanation_details_are_readable() {
        let result = compute_fit(
            &candidate(),
            &job(),
            &ScoringWeights::default(),
            skill(1.0, SkillScoreSource::KeywordFallback),
        );
        assert_eq!(
            result.explanation.experience.details,
            "5 years vs 3-8 years required"
        );
        assert_eq!(result.explanation.availability.details, "Status: open");
        assert!(result
            .explanation
            .skill_match
            .details
            .contains("AI assessment unavailable"));
        assert!(result.explanation.salary.details.contains("90000-120000"));
    }

    #[test]
    fn test_experience_details_unknown_and_open_ended() {
        let mut c = candidate();
        c.experience_years = None;
        let mut j = job();
        j.experience_max = None;
        assert_eq!(
            experience_details(&c, &j),
            "Unknown experience vs 3+ years required"
        );
    }

    #[test]
    fn test_explanation_serializes_component_names() {
        let result = compute_fit(
            &candidate(),
            &job(),
            &ScoringWeights::default(),
            skill(0.5, SkillScoreSource::Keyword),
        );
        let json = serde_json::to_value(&result.explanation).unwrap();
        for key in ["skill_match", "experience", "timezone", "availability", "salary"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert_eq!(json["skill_match"]["weight"], 0.4);
    }
}
