//! Intake gateway port
//!
//! Defines the interface for delivering a lead to the external intake service.

use async_trait::async_trait;
use haul_domain::LeadPayload;
use thiserror::Error;

/// Errors that can occur while delivering a lead
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Intake endpoint rejected the request with status {0}")]
    Rejected(u16),

    #[error("Invalid intake configuration: {0}")]
    InvalidConfig(String),
}

/// Gateway to the intake endpoint
///
/// One call is one outbound request: implementations must not retry.
/// Any timeout is the implementation's own concern.
#[async_trait]
pub trait IntakeGateway: Send + Sync {
    /// Deliver the payload. `Ok` means the endpoint answered with a 2xx status.
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), IntakeError>;
}
