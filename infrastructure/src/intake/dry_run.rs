//! Intake gateway that prints the payload and accepts it.

use async_trait::async_trait;
use haul_application::{IntakeError, IntakeGateway};
use haul_domain::LeadPayload;
use tracing::info;

/// Accepts every lead without contacting the endpoint (for `--dry-run`)
pub struct DryRunIntakeGateway;

#[async_trait]
impl IntakeGateway for DryRunIntakeGateway {
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), IntakeError> {
        let json = serde_json::to_string_pretty(payload)
            .map_err(|e| IntakeError::InvalidConfig(e.to_string()))?;
        info!("Dry run: lead not sent");
        println!("{}", json);
        Ok(())
    }
}
