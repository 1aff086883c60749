//! Application layer for haul-quote
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    analytics::{AnalyticsError, AnalyticsSink, NoAnalytics},
    intake_gateway::{IntakeError, IntakeGateway},
    navigator::{Navigator, NoNavigation},
};
pub use use_cases::run_wizard::{SessionProgress, WizardSession};
pub use use_cases::submit_quote::SubmitQuoteUseCase;
