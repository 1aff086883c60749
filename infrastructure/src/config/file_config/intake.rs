//! Intake endpoint configuration from TOML (`[intake]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [intake]
//! endpoint = "https://hooks.example.com/webhook/quote"
//! auth_token = "s3cret"
//! timeout_seconds = 30
//! ```

use haul_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw intake configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIntakeConfig {
    /// URL the lead payload is posted to
    pub endpoint: Option<String>,
    /// Bearer token sent in the `Authorization` header
    pub auth_token: Option<String>,
    /// Transport-level request timeout
    pub timeout_seconds: Option<u64>,
}

impl FileIntakeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Check the endpoint, returning the issues found
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let Some(endpoint) = self.endpoint.as_deref().map(str::trim) else {
            return vec![ConfigIssue::error(
                ConfigIssueCode::MissingEndpoint,
                "intake.endpoint is not set",
            )];
        };

        if endpoint.is_empty() {
            return vec![ConfigIssue::error(
                ConfigIssueCode::MissingEndpoint,
                "intake.endpoint is empty",
            )];
        }

        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return vec![ConfigIssue::error(
                ConfigIssueCode::InvalidEndpoint {
                    value: endpoint.to_string(),
                },
                format!("intake.endpoint must be an http(s) URL, got '{}'", endpoint),
            )];
        }

        Vec::new()
    }
}
