use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::string_list;

/// Column list for job reads and `RETURNING` clauses. Timestamps are
/// `timestamp without time zone` and nullable in the shared schema.
pub const JOB_COLUMNS: &str = "id, title, description, requirements, location, remote_friendly, \
    salary_min, salary_max, experience_min, experience_max, skills_required, skills_preferred, \
    timezone_preference, created_by, status, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Value,
    pub location: Option<String>,
    pub remote_friendly: Option<bool>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub experience_min: Option<i32>,
    pub experience_max: Option<i32>,
    pub skills_required: Option<Value>,
    pub skills_preferred: Option<Value>,
    pub timezone_preference: Option<String>,
    pub created_by: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl JobRow {
    pub fn required_skills(&self) -> Vec<String> {
        string_list(self.skills_required.as_ref())
    }

    pub fn preferred_skills(&self) -> Vec<String> {
        string_list(self.skills_preferred.as_ref())
    }
}

/// Lifecycle state of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Paused,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Closed => "closed",
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "closed" => Ok(Self::Closed),
            other => Err(format!(
                "Invalid job status '{other}' (expected active, paused or closed)"
            )),
        }
    }
}
