use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const FEEDBACK_COLUMNS: &str =
    "id, job_id, resume_id, recruiter_id, feedback_type, relevance_rating, notes, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecruiterFeedbackRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub resume_id: Uuid,
    pub recruiter_id: String,
    pub feedback_type: String,
    pub relevance_rating: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    ThumbsUp,
    ThumbsDown,
    Hired,
    Interviewed,
    Contacted,
    NotInterested,
}

impl FeedbackType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThumbsUp => "thumbs_up",
            Self::ThumbsDown => "thumbs_down",
            Self::Hired => "hired",
            Self::Interviewed => "interviewed",
            Self::Contacted => "contacted",
            Self::NotInterested => "not_interested",
        }
    }
}

impl std::str::FromStr for FeedbackType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "thumbs_up" => Ok(Self::ThumbsUp),
            "thumbs_down" => Ok(Self::ThumbsDown),
            "hired" => Ok(Self::Hired),
            "interviewed" => Ok(Self::Interviewed),
            "contacted" => Ok(Self::Contacted),
            "not_interested" => Ok(Self::NotInterested),
            other => Err(format!("Invalid feedback type '{other}'")),
        }
    }
}
