//! Outcome of one submission attempt

/// Message shown in the submission-error banner
pub const SUBMISSION_ERROR_MESSAGE: &str =
    "There was an error submitting your request. Please try again.";

/// Result of a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    /// Failure carrying the standard banner message
    pub fn failure() -> Self {
        Outcome::Failure(SUBMISSION_ERROR_MESSAGE.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}
