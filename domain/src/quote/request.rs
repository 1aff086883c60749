//! Quote request entity

use super::field::Field;
use super::species::Species;
use super::timeline::Timeline;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The quote request under construction (Entity)
///
/// Created empty when the wizard starts and mutated one field at a time.
/// Free-text fields stay plain strings until submission; the two pickers
/// are closed enums, and the optional fields are `None` until the user
/// provides a non-empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub species: Option<Species>,
    pub quantity: String,
    pub pickup_city: String,
    pub pickup_state: String,
    pub pickup_zip: Option<String>,
    pub dropoff_city: String,
    pub dropoff_state: String,
    pub dropoff_zip: Option<String>,
    pub timeline: Option<Timeline>,
    pub notes: Option<String>,
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw value of a field; absent values read as the empty string
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Species => self.species.as_ref().map_or("", Species::as_str),
            Field::Quantity => &self.quantity,
            Field::PickupCity => &self.pickup_city,
            Field::PickupState => &self.pickup_state,
            Field::PickupZip => self.pickup_zip.as_deref().unwrap_or(""),
            Field::DropoffCity => &self.dropoff_city,
            Field::DropoffState => &self.dropoff_state,
            Field::DropoffZip => self.dropoff_zip.as_deref().unwrap_or(""),
            Field::Timeline => self.timeline.as_ref().map_or("", Timeline::as_str),
            Field::Notes => self.notes.as_deref().unwrap_or(""),
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
        }
    }

    /// Write a raw value into a field.
    ///
    /// An empty value clears a picker or optional field back to `None`.
    /// A non-empty picker value must name one of its choices; on error the
    /// request is left unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), DomainError> {
        let value = value.into();
        match field {
            Field::Species => {
                self.species = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            Field::Timeline => {
                self.timeline = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
            Field::PickupZip => self.pickup_zip = non_empty(value),
            Field::DropoffZip => self.dropoff_zip = non_empty(value),
            Field::Notes => self.notes = non_empty(value),
            Field::Quantity => self.quantity = value,
            Field::PickupCity => self.pickup_city = value,
            Field::PickupState => self.pickup_state = value,
            Field::DropoffCity => self.dropoff_city = value,
            Field::DropoffState => self.dropoff_state = value,
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
        }
        Ok(())
    }

    /// Builder-style [`set`](Self::set) for tests and fixtures
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Result<Self, DomainError> {
        self.set(field, value)?;
        Ok(self)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
