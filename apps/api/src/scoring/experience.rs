/// Ceiling assumed when a job does not cap experience.
pub const DEFAULT_EXPERIENCE_MAX: f64 = 20.0;
/// Overqualified candidates never drop below this.
const OVERQUALIFIED_FLOOR: f64 = 0.7;
/// Years over the ceiling that cost a full point before the floor applies.
const OVERQUALIFIED_SPAN: f64 = 10.0;

/// Scores candidate years against the job's experience band.
///
/// Unknown or negative candidate years count as 0; a missing minimum is 0 and a
/// missing maximum is [`DEFAULT_EXPERIENCE_MAX`]. An explicit min above an explicit
/// max is malformed job data and scores a neutral 0.5.
pub fn score_experience(
    candidate_years: Option<f64>,
    job_min: Option<f64>,
    job_max: Option<f64>,
) -> f64 {
    if let (Some(min), Some(max)) = (job_min, job_max) {
        if min > max {
            return 0.5;
        }
    }

    let years = non_negative(candidate_years.unwrap_or(0.0));
    let min = non_negative(job_min.unwrap_or(0.0));
    let max = job_max.map(non_negative).unwrap_or(DEFAULT_EXPERIENCE_MAX);

    if years < min {
        (years / min).max(0.0)
    } else if years > max {
        (1.0 - (years - max) / OVERQUALIFIED_SPAN).max(OVERQUALIFIED_FLOOR)
    } else {
        1.0
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bounds_score_one() {
        assert_eq!(score_experience(Some(3.0), Some(3.0), Some(8.0)), 1.0);
        assert_eq!(score_experience(Some(8.0), Some(3.0), Some(8.0)), 1.0);
    }

    #[test]
    fn test_zero_years_against_positive_min_is_zero() {
        assert_eq!(score_experience(Some(0.0), Some(3.0), Some(8.0)), 0.0);
    }

    #[test]
    fn test_unknown_years_against_positive_min_is_zero() {
        assert_eq!(score_experience(None, Some(5.0), None), 0.0);
    }

    #[test]
    fn test_zero_min_zero_years_is_in_range() {
        assert_eq!(score_experience(Some(0.0), Some(0.0), Some(5.0)), 1.0);
        assert_eq!(score_experience(None, None, None), 1.0);
    }

    #[test]
    fn test_below_min_is_proportional() {
        let score = score_experience(Some(2.0), Some(4.0), Some(8.0));
        assert!((score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_overqualified_penalty_and_floor() {
        let score = score_experience(Some(10.0), Some(2.0), Some(8.0));
        assert!((score - 0.8).abs() < 1e-9);
        assert_eq!(score_experience(Some(40.0), Some(2.0), Some(8.0)), 0.7);
    }

    #[test]
    fn test_missing_max_defaults_to_twenty() {
        assert_eq!(score_experience(Some(20.0), Some(2.0), None), 1.0);
        let score = score_experience(Some(22.0), Some(2.0), None);
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_zero_max_is_a_hard_cap() {
        // 0 is a real cap, not "uncapped": 3 years over it costs 0.3.
        assert!((score_experience(Some(3.0), Some(0.0), Some(0.0)) - 0.7).abs() < 1e-9);
        assert!((score_experience(Some(2.0), None, Some(0.0)) - 0.8).abs() < 1e-9);
        assert_eq!(score_experience(Some(3.0), None, None), 1.0);
    }

    #[test]
    fn test_negative_years_clamped_to_zero() {
        assert_eq!(score_experience(Some(-4.0), Some(2.0), Some(5.0)), 0.0);
        assert_eq!(score_experience(Some(-4.0), None, Some(5.0)), 1.0);
    }

    #[test]
    fn test_inverted_job_band_is_neutral() {
        assert_eq!(score_experience(Some(5.0), Some(10.0), Some(3.0)), 0.5);
    }
}
