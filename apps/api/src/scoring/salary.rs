use crate::scoring::profile::SalaryRange;

/// Score when the job pays above what the candidate asks for.
const UNDER_ASK_SCORE: f64 = 0.9;

/// Scores salary compatibility between the candidate's ask and the job's band.
///
/// Only missing *minimums* trigger the neutral 0.5; a missing maximum reads as 0
/// in the range checks. Inverted ranges on either side are treated as malformed
/// and also score 0.5. When the candidate asks above a job ceiling of 0 the gap
/// ratio is undefined and the score is 0.0.
pub fn score_salary(candidate: SalaryRange, job: SalaryRange) -> f64 {
    let (Some(candidate_min), Some(job_min)) = (candidate.min, job.min) else {
        return 0.5;
    };
    if candidate.is_inverted() || job.is_inverted() {
        return 0.5;
    }

    let candidate_max = candidate.max.unwrap_or(0.0);
    let job_max = job.max.unwrap_or(0.0);

    if candidate_min <= job_max && candidate_max >= job_min {
        1.0
    } else if candidate_min > job_max {
        if job_max <= 0.0 {
            return 0.0;
        }
        let gap = candidate_min - job_max;
        (1.0 - gap / job_max).max(0.0)
    } else {
        UNDER_ASK_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: Option<f64>, max: Option<f64>) -> SalaryRange {
        SalaryRange { min, max }
    }

    #[test]
    fn test_overlapping_ranges_score_one() {
        let score = score_salary(
            range(Some(90_000.0), Some(120_000.0)),
            range(Some(100_000.0), Some(140_000.0)),
        );
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_missing_minimum_is_neutral() {
        assert_eq!(
            score_salary(range(None, Some(120_000.0)), range(Some(100_000.0), None)),
            0.5
        );
        assert_eq!(
            score_salary(range(Some(90_000.0), None), range(None, Some(140_000.0))),
            0.5
        );
    }

    #[test]
    fn test_ask_above_ceiling_decreases_with_gap() {
        let job = range(Some(80_000.0), Some(100_000.0));
        let s150 = score_salary(range(Some(150_000.0), None), job);
        let s120 = score_salary(range(Some(120_000.0), None), job);
        let s180 = score_salary(range(Some(180_000.0), None), job);
        assert!((0.0..1.0).contains(&s150));
        assert!((s150 - 0.5).abs() < 1e-9);
        assert!(s120 > s150 && s150 > s180);
        assert_eq!(score_salary(range(Some(250_000.0), None), job), 0.0);
    }

    #[test]
    fn test_zero_job_ceiling_is_zero_not_panic() {
        let score = score_salary(range(Some(50_000.0), None), range(Some(0.0), Some(0.0)));
        assert_eq!(score, 0.0);
        let missing_ceiling = score_salary(range(Some(50_000.0), None), range(Some(40_000.0), None));
        assert_eq!(missing_ceiling, 0.0);
    }

    #[test]
    fn test_job_pays_above_ask() {
        let score = score_salary(
            range(Some(60_000.0), Some(70_000.0)),
            range(Some(100_000.0), Some(140_000.0)),
        );
        assert_eq!(score, 0.9);
    }

    #[test]
    fn test_missing_candidate_max_reads_as_zero() {
        // candidate_min within the band but candidate_max defaults to 0 < job_min
        let score = score_salary(
            range(Some(110_000.0), None),
            range(Some(100_000.0), Some(140_000.0)),
        );
        assert_eq!(score, 0.9);
    }

    #[test]
    fn test_inverted_range_is_neutral() {
        let score = score_salary(
            range(Some(150_000.0), Some(90_000.0)),
            range(Some(100_000.0), Some(140_000.0)),
        );
        assert_eq!(score, 0.5);
    }
}
