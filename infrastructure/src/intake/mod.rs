//! Intake gateway adapters.
//!
//! - [`WebhookIntakeGateway`] posts the lead as JSON to the configured endpoint
//! - [`DryRunIntakeGateway`] prints the payload instead of sending it

mod dry_run;
mod webhook;

pub use dry_run::DryRunIntakeGateway;
pub use webhook::WebhookIntakeGateway;
