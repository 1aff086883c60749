//! Port for lead analytics.
//!
//! Analytics is a best-effort side channel: the submission pipeline never
//! waits on it and ignores its failures.

use async_trait::async_trait;
use haul_domain::LeadEvent;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Analytics sink unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to record event: {0}")]
    WriteFailed(String),
}

/// Destination for lead-generation events
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track(&self, event: LeadEvent) -> Result<(), AnalyticsError>;
}

/// No-op implementation for tests and when analytics is disabled.
pub struct NoAnalytics;

#[async_trait]
impl AnalyticsSink for NoAnalytics {
    async fn track(&self, _event: LeadEvent) -> Result<(), AnalyticsError> {
        Ok(())
    }
}
