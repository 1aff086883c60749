//! Field identifiers of a quote request.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named field of [`QuoteRequest`](super::QuoteRequest).
///
/// Variants are declared in form order, so the derived `Ord` sorts fields
/// the way they appear on screen. Error maps rely on this to find the
/// first failing field of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Species,
    Quantity,
    PickupCity,
    PickupState,
    PickupZip,
    DropoffCity,
    DropoffState,
    DropoffZip,
    Timeline,
    Notes,
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Species,
            Field::Quantity,
            Field::PickupCity,
            Field::PickupState,
            Field::PickupZip,
            Field::DropoffCity,
            Field::DropoffState,
            Field::DropoffZip,
            Field::Timeline,
            Field::Notes,
            Field::Name,
            Field::Phone,
            Field::Email,
        ]
    }

    /// Wire name, as used in error maps and the outbound payload
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Species => "species",
            Field::Quantity => "quantity",
            Field::PickupCity => "pickup_city",
            Field::PickupState => "pickup_state",
            Field::PickupZip => "pickup_zip",
            Field::DropoffCity => "dropoff_city",
            Field::DropoffState => "dropoff_state",
            Field::DropoffZip => "dropoff_zip",
            Field::Timeline => "timeline",
            Field::Notes => "notes",
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Species => "Type of Animal",
            Field::Quantity => "Number of Animals",
            Field::PickupCity | Field::DropoffCity => "City",
            Field::PickupState | Field::DropoffState => "State",
            Field::PickupZip | Field::DropoffZip => "ZIP Code",
            Field::Timeline => "Pickup Timeline",
            Field::Notes => "Additional Notes",
            Field::Name => "Full Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email Address",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::Quantity => Some("e.g., 25"),
            Field::PickupState => Some("e.g., TX"),
            Field::DropoffState => Some("e.g., OK"),
            Field::Phone => Some("(555) 555-5555"),
            Field::Notes => Some("Any special requirements or additional information..."),
            _ => None,
        }
    }

    /// Whether the field may be left absent
    pub fn is_optional(&self) -> bool {
        matches!(self, Field::PickupZip | Field::DropoffZip | Field::Notes)
    }

    /// Maximum number of characters the input accepts, if limited
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Field::PickupState | Field::DropoffState => Some(2),
            _ => None,
        }
    }

    /// Whether the field is picked from a fixed list of choices
    pub fn is_choice(&self) -> bool {
        matches!(self, Field::Species | Field::Timeline)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_wire_names() {
        for field in Field::all() {
            assert_eq!(field.as_str().parse::<Field>().ok(), Some(*field));
        }
        assert!("zip".parse::<Field>().is_err());
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<_> = Field::all().iter().filter(|f| f.is_optional()).collect();
        assert_eq!(
            optional,
            vec![&Field::PickupZip, &Field::DropoffZip, &Field::Notes]
        );
    }

    #[test]
    fn test_order_follows_form() {
        assert!(Field::Species < Field::Quantity);
        assert!(Field::Quantity < Field::PickupCity);
        assert!(Field::Name < Field::Phone);
        assert!(Field::Phone < Field::Email);
    }

    #[test]
    fn test_state_inputs_are_two_characters() {
        assert_eq!(Field::PickupState.max_length(), Some(2));
        assert_eq!(Field::DropoffState.max_length(), Some(2));
        assert_eq!(Field::PickupCity.max_length(), None);
    }
}
