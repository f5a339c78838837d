use crate::models::candidate::AvailabilityStatus;

pub fn score_availability(status: AvailabilityStatus) -> f64 {
    match status {
        AvailabilityStatus::ActivelyLooking => 1.0,
        AvailabilityStatus::Open => 0.7,
        AvailabilityStatus::NotLooking => 0.1,
        AvailabilityStatus::Unknown => 0.5,
    }
}
