//! Field validators.
//!
//! Each rule is a pure function of the field's raw value. No rule reads a
//! sibling field today, but [`validate_in`] takes the whole request so a
//! rule that needs one can be added without changing callers.

use crate::quote::{Field, QuoteRequest};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 10;

/// Result of validating a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(String),
}

impl Verdict {
    fn invalid(message: &str) -> Self {
        Verdict::Invalid(message.to_string())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// The failure message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(message) => Some(message),
        }
    }
}

/// Validate a raw field value
pub fn validate_field(field: Field, value: &str) -> Verdict {
    let blank = value.trim().is_empty();
    match field {
        Field::Species if value.is_empty() => Verdict::invalid("Please select an animal type"),
        Field::Quantity if blank => Verdict::invalid("Quantity is required"),
        Field::PickupCity if blank => Verdict::invalid("Pickup city is required"),
        Field::PickupState if blank => Verdict::invalid("Pickup state is required"),
        Field::DropoffCity if blank => Verdict::invalid("Dropoff city is required"),
        Field::DropoffState if blank => Verdict::invalid("Dropoff state is required"),
        Field::Timeline if value.is_empty() => Verdict::invalid("Please select a timeline"),
        Field::Name if blank => Verdict::invalid("Name is required"),
        Field::Phone if blank => Verdict::invalid("Phone is required"),
        Field::Phone if count_digits(value) < MIN_PHONE_DIGITS => {
            Verdict::invalid("Please enter a valid phone number")
        }
        Field::Email if blank => Verdict::invalid("Email is required"),
        Field::Email if !is_email(value) => Verdict::invalid("Please enter a valid email address"),
        _ => Verdict::Valid,
    }
}

/// Validate a field against the current contents of a request
pub fn validate_in(field: Field, request: &QuoteRequest) -> Verdict {
    validate_field(field, request.get(field))
}

/// Number of ASCII decimal digits in a value
pub fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
