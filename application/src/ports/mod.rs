//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod analytics;
pub mod intake_gateway;
pub mod navigator;
