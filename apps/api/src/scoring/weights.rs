use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Per-component weights for the composite fit score.
///
/// The composite is a plain weighted sum: weights are never renormalized, so a
/// 0–1 composite requires weights that sum to ~1. That is the caller's call.
/// Omitted fields in a request body fall back to the defaults below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub timezone: f64,
    pub availability: f64,
    pub salary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.4,
            experience: 0.25,
            timezone: 0.15,
            availability: 0.1,
            salary: 0.1,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.timezone + self.availability + self.salary
    }

    /// True when the weights sum to 1 within rounding, i.e. fit scores stay in [0, 1].
    pub fn is_normalized(&self) -> bool {
        (self.sum() - 1.0).abs() < 1e-6
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("skills", self.skills),
            ("experience", self.experience),
            ("timezone", self.timezone),
            ("availability", self.availability),
            ("salary", self.salary),
        ]
    }

    /// Every weight must be finite and non-negative. The sum is not checked.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::Validation(format!(
                    "weight '{name}' must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
