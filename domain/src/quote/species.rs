//! Animal type being hauled.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of animal in a quote request.
///
/// Serializes to the exact label shown in the species picker, which is also
/// the value the intake endpoint receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cattle,
    Horses,
    Sheep,
    Goats,
    Hogs,
    Other,
}

impl Species {
    /// All choices, in picker order
    pub fn all() -> &'static [Species] {
        &[
            Species::Cattle,
            Species::Horses,
            Species::Sheep,
            Species::Goats,
            Species::Hogs,
            Species::Other,
        ]
    }

    /// Label as displayed and transmitted
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Cattle => "Cattle",
            Species::Horses => "Horses",
            Species::Sheep => "Sheep",
            Species::Goats => "Goats",
            Species::Hogs => "Hogs",
            Species::Other => "Other",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Species {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Species::all()
            .iter()
            .copied()
            .find(|species| species.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidSpecies(s.to_string()))
    }
}
