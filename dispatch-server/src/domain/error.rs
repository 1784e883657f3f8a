//! Domain error types.
//!
//! These represent internal consistency failures: a caller paired
//! destinations with travel times incorrectly. They signal a programming
//! defect, not a user-facing condition, and are surfaced loudly rather
//! than retried.

/// Consistency failures in sequencing input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Destination list and travel-time list disagree in length
    #[error("travel time count mismatch: {expected} destinations, {actual} times")]
    TravelTimeCount { expected: usize, actual: usize },

    /// A travel time is non-finite or negative
    #[error("invalid travel time {value} for destination {index}")]
    BadTravelTime { index: usize, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::TravelTimeCount {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "travel time count mismatch: 3 destinations, 2 times"
        );

        let err = DomainError::BadTravelTime {
            index: 1,
            value: f64::NAN,
        };
        assert!(err.to_string().contains("destination 1"));
    }
}
