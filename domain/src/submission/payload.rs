//! Outbound intake payload

use crate::core::error::DomainError;
use crate::normalize::normalize_phone;
use crate::quote::{QuoteRequest, Species, Timeline};
use serde::{Deserialize, Serialize};

/// JSON body posted to the intake endpoint (Value Object)
///
/// Optional fields are omitted from the JSON entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadPayload {
    pub name: String,
    /// E.164 form of the captured phone number
    pub phone: String,
    pub email: String,
    pub species: Species,
    pub quantity: String,
    pub pickup_city: String,
    pub pickup_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_zip: Option<String>,
    pub dropoff_city: String,
    pub dropoff_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropoff_zip: Option<String>,
    pub timeline: Timeline,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeadPayload {
    /// Build the payload, normalizing the phone number.
    ///
    /// Fails only when a picker was never filled in, which step validation
    /// rules out before submission.
    pub fn from_request(request: &QuoteRequest) -> Result<Self, DomainError> {
        let species = request
            .species
            .ok_or(DomainError::IncompleteRequest("species"))?;
        let timeline = request
            .timeline
            .ok_or(DomainError::IncompleteRequest("timeline"))?;

        Ok(Self {
            name: request.name.clone(),
            phone: normalize_phone(&request.phone),
            email: request.email.clone(),
            species,
            quantity: request.quantity.clone(),
            pickup_city: request.pickup_city.clone(),
            pickup_state: request.pickup_state.clone(),
            pickup_zip: request.pickup_zip.clone(),
            dropoff_city: request.dropoff_city.clone(),
            dropoff_state: request.dropoff_state.clone(),
            dropoff_zip: request.dropoff_zip.clone(),
            timeline,
            notes: request.notes.clone(),
        })
    }

    /// Serialize to the JSON object sent on the wire
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
