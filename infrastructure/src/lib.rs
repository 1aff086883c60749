//! Infrastructure layer for haul-quote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod analytics;
pub mod config;
pub mod intake;

// Re-export commonly used types
pub use analytics::JsonlAnalyticsSink;
pub use config::{
    ConfigLoader, FileAnalyticsConfig, FileConfig, FileIntakeConfig, FileOutputConfig,
};
pub use intake::{DryRunIntakeGateway, WebhookIntakeGateway};
