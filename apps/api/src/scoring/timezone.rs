/// Region-prefix match on timezone identifiers ("America/New_York" vs "America").
/// No offset arithmetic: it is either a containment match or a flat mismatch score.
pub fn score_timezone(candidate_tz: Option<&str>, job_tz: Option<&str>) -> f64 {
    let (Some(candidate), Some(job)) = (non_blank(candidate_tz), non_blank(job_tz)) else {
        return 0.5;
    };

    let candidate = candidate.to_lowercase();
    let job = job.to_lowercase();

    if job.contains(&candidate) || candidate.contains(&job) {
        1.0
    } else {
        0.3
    }
}

fn non_blank(tz: Option<&str>) -> Option<&str> {
    tz.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_side_is_neutral() {
        assert_eq!(score_timezone(None, Some("UTC")), 0.5);
        assert_eq!(score_timezone(Some("UTC"), None), 0.5);
        assert_eq!(score_timezone(Some("  "), Some("UTC")), 0.5);
    }

    #[test]
    fn test_region_prefix_matches_both_ways() {
        assert_eq!(score_timezone(Some("America/New_York"), Some("america")), 1.0);
        assert_eq!(score_timezone(Some("Europe"), Some("Europe/Berlin")), 1.0);
    }

    #[test]
    fn test_mismatch_is_flat() {
        assert_eq!(score_timezone(Some("Asia/Tokyo"), Some("America/Chicago")), 0.3);
        assert_eq!(score_timezone(Some("Europe/London"), Some("Europe/Paris")), 0.3);
    }
}
