//! Submit Quote use case
//!
//! Normalizes a completed quote request, delivers it to the intake endpoint
//! and, once accepted, records the lead-generation event.

use crate::ports::analytics::AnalyticsSink;
use crate::ports::intake_gateway::IntakeGateway;
use haul_domain::{LeadEvent, LeadPayload, Outcome, QuoteRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for submitting one quote request
///
/// Every call makes exactly one delivery attempt. Failures of any kind are
/// turned into [`Outcome::Failure`] with the standard banner message.
pub struct SubmitQuoteUseCase<G: IntakeGateway + 'static, A: AnalyticsSink + 'static> {
    gateway: Arc<G>,
    analytics: Arc<A>,
}

impl<G: IntakeGateway + 'static, A: AnalyticsSink + 'static> SubmitQuoteUseCase<G, A> {
    pub fn new(gateway: Arc<G>, analytics: Arc<A>) -> Self {
        Self { gateway, analytics }
    }

    /// Execute the use case
    pub async fn execute(&self, request: &QuoteRequest) -> Outcome {
        let payload = match LeadPayload::from_request(request) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Cannot build lead payload: {}", e);
                return Outcome::failure();
            }
        };

        info!("Submitting quote request for {} {}", payload.quantity, payload.species);
        debug!("Lead payload: {}", payload.to_json());

        if let Err(e) = self.gateway.submit_lead(&payload).await {
            warn!("Form submission error: {}", e);
            return Outcome::failure();
        }

        info!("Quote request accepted");
        self.track_lead(LeadEvent::from_request(request));
        Outcome::Success
    }

    /// Record the lead event on a detached task; its result never reaches
    /// the caller.
    fn track_lead(&self, event: LeadEvent) {
        let analytics = Arc::clone(&self.analytics);
        tokio::spawn(async move {
            if let Err(e) = analytics.track(event).await {
                warn!("Analytics event dropped: {}", e);
            }
        });
    }
}
