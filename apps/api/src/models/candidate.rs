use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::string_list;

/// Column list for candidate reads. The `resumes` table also carries a tsvector
/// search column that must never be selected into this row.
pub const CANDIDATE_COLUMNS: &str = "id, name, location, raw_text, pdf_url, skills, \
    experience_years, availability_status, timezone, preferred_salary_min, preferred_salary_max";

/// A candidate as stored in the `resumes` table. Read-only to the scoring core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub raw_text: String,
    pub pdf_url: Option<String>,
    pub skills: Option<Value>,
    pub experience_years: Option<i32>,
    pub availability_status: Option<String>,
    pub timezone: Option<String>,
    pub preferred_salary_min: Option<i32>,
    pub preferred_salary_max: Option<i32>,
}

impl CandidateRow {
    pub fn skill_list(&self) -> Vec<String> {
        string_list(self.skills.as_ref())
    }

    pub fn availability(&self) -> AvailabilityStatus {
        AvailabilityStatus::parse(self.availability_status.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    ActivelyLooking,
    Open,
    NotLooking,
    #[default]
    Unknown,
}

impl AvailabilityStatus {
    /// Any unrecognized or missing status reads as `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("actively_looking") => Self::ActivelyLooking,
            Some("open") => Self::Open,
            Some("not_looking") => Self::NotLooking,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActivelyLooking => "actively_looking",
            Self::Open => "open",
            Self::NotLooking => "not_looking",
            Self::Unknown => "unknown",
        }
    }
}
