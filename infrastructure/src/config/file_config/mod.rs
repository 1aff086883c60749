//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analytics;
mod intake;
mod output;

pub use analytics::FileAnalyticsConfig;
pub use intake::FileIntakeConfig;
pub use output::FileOutputConfig;

use haul_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Intake endpoint settings
    pub intake: FileIntakeConfig,
    /// Lead analytics settings
    pub analytics: FileAnalyticsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.intake.validate());
        issues.extend(self.analytics.validate());
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[intake]
endpoint = "https://hooks.example.com/webhook/quote"
auth_token = "s3cret"
timeout_seconds = 20

[analytics]
enabled = true
log_path = "/var/log/haul-quote/leads.jsonl"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.intake.endpoint.as_deref(),
            Some("https://hooks.example.com/webhook/quote")
        );
        assert_eq!(config.intake.auth_token.as_deref(), Some("s3cret"));
        assert_eq!(config.intake.timeout_seconds, Some(20));
        assert_eq!(
            config.analytics.log_path,
            Some(PathBuf::from("/var/log/haul-quote/leads.jsonl"))
        );
        assert!(!config.output.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[intake]
endpoint = "http://localhost:5678/webhook"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.intake.auth_token.is_none());
        // Defaults should apply
        assert!(config.analytics.enabled);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_reports_missing_endpoint() {
        let issues = FileConfig::default().validate();
        assert!(ConfigIssue::has_errors(&issues));
    }
}
