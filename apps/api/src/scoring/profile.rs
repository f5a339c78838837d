//! Scoring-side views of candidates and jobs, decoupled from table rows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::candidate::{AvailabilityStatus, CandidateRow};
use crate::models::job::JobRow;

/// Characters of resume text forwarded to the skill matcher.
pub const RESUME_EXCERPT_CHARS: usize = 2000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl SalaryRange {
    /// True when both bounds are present and min exceeds max.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: Uuid,
    pub skills: Vec<String>,
    /// `None` means unknown.
    pub experience_years: Option<f64>,
    pub timezone: Option<String>,
    pub availability: AvailabilityStatus,
    pub salary: SalaryRange,
    pub resume_text: String,
}

impl CandidateProfile {
    pub fn resume_excerpt(&self) -> &str {
        match self.resume_text.char_indices().nth(RESUME_EXCERPT_CHARS) {
            Some((idx, _)) => &self.resume_text[..idx],
            None => &self.resume_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub id: Uuid,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience_min: Option<f64>,
    pub experience_max: Option<f64>,
    pub timezone_preference: Option<String>,
    pub salary: SalaryRange,
}

impl From<&CandidateRow> for CandidateProfile {
    fn from(row: &CandidateRow) -> Self {
        Self {
            id: row.id,
            skills: row.skill_list(),
            experience_years: row.experience_years.map(f64::from),
            timezone: row.timezone.clone(),
            availability: row.availability(),
            salary: SalaryRange {
                min: row.preferred_salary_min.map(f64::from),
                max: row.preferred_salary_max.map(f64::from),
            },
            resume_text: row.raw_text.clone(),
        }
    }
}

impl From<&JobRow> for JobProfile {
    fn from(row: &JobRow) -> Self {
        Self {
            id: row.id,
            required_skills: row.required_skills(),
            preferred_skills: row.preferred_skills(),
            experience_min: row.experience_min.map(f64::from),
            experience_max: row.experience_max.map(f64::from),
            timezone_preference: row.timezone_preference.clone(),
            salary: SalaryRange {
                min: row.salary_min.map(f64::from),
                max: row.salary_max.map(f64::from),
            },
        }
    }
}
