//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid species: {0}")]
    InvalidSpecies(String),

    #[error("Invalid timeline: {0}")]
    InvalidTimeline(String),

    #[error("Invalid step number: {0}")]
    InvalidStep(u8),

    #[error("Submit is only allowed on the last step (current step: {0})")]
    NotOnLastStep(u8),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("No submission is in flight")]
    NoSubmissionInFlight,

    #[error("Quote request is incomplete: {0} is missing")]
    IncompleteRequest(&'static str),
}

impl DomainError {
    /// Check if this error was caused by the in-flight submission guard
    pub fn is_in_flight(&self) -> bool {
        matches!(self, DomainError::SubmissionInFlight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_flight_error_display() {
        let error = DomainError::SubmissionInFlight;
        assert_eq!(error.to_string(), "A submission is already in flight");
    }

    #[test]
    fn test_is_in_flight_check() {
        assert!(DomainError::SubmissionInFlight.is_in_flight());
        assert!(!DomainError::NotOnLastStep(2).is_in_flight());
        assert!(!DomainError::UnknownField("x".to_string()).is_in_flight());
    }

    #[test]
    fn test_incomplete_request_display() {
        let error = DomainError::IncompleteRequest("species");
        assert_eq!(
            error.to_string(),
            "Quote request is incomplete: species is missing"
        );
    }
}
