//! Lead-generation analytics event

use crate::quote::QuoteRequest;
use serde::{Deserialize, Serialize};

/// Event name recorded for every accepted quote request
pub const LEAD_EVENT_NAME: &str = "generate_lead";

/// Analytics event emitted after a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadEvent {
    pub event: String,
    pub species: String,
    pub quantity: String,
    pub pickup_state: String,
    pub dropoff_state: String,
}

impl LeadEvent {
    pub fn from_request(request: &QuoteRequest) -> Self {
        Self {
            event: LEAD_EVENT_NAME.to_string(),
            species: request
                .species
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            quantity: request.quantity.clone(),
            pickup_state: request.pickup_state.clone(),
            dropoff_state: request.dropoff_state.clone(),
        }
    }
}
