//! Pickup timeline horizons.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon the customer needs pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "Within 24 hours")]
    Within24Hours,
    #[serde(rename = "Within 3 days")]
    Within3Days,
    #[serde(rename = "Within 7 days")]
    Within7Days,
    #[serde(rename = "Within 2 weeks")]
    Within2Weeks,
    #[serde(rename = "Within a month")]
    WithinAMonth,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Timeline {
    /// All choices, in picker order
    pub fn all() -> &'static [Timeline] {
        &[
            Timeline::Within24Hours,
            Timeline::Within3Days,
            Timeline::Within7Days,
            Timeline::Within2Weeks,
            Timeline::WithinAMonth,
            Timeline::Flexible,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Within24Hours => "Within 24 hours",
            Timeline::Within3Days => "Within 3 days",
            Timeline::Within7Days => "Within 7 days",
            Timeline::Within2Weeks => "Within 2 weeks",
            Timeline::WithinAMonth => "Within a month",
            Timeline::Flexible => "Flexible",
        }
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Timeline {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Timeline::all()
            .iter()
            .copied()
            .find(|timeline| timeline.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidTimeline(s.to_string()))
    }
}
