//! Analytics configuration from TOML (`[analytics]` section)

use haul_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw analytics configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalyticsConfig {
    /// Record a `generate_lead` event for each accepted request
    pub enabled: bool,
    /// JSONL file events are appended to
    pub log_path: Option<PathBuf>,
}

impl Default for FileAnalyticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: None,
        }
    }
}

impl FileAnalyticsConfig {
    /// Where events should be written, if anywhere
    pub fn sink_path(&self) -> Option<&PathBuf> {
        if self.enabled {
            self.log_path.as_ref()
        } else {
            None
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.enabled && self.log_path.is_none() {
            vec![ConfigIssue::warning(
                ConfigIssueCode::AnalyticsWithoutLogPath,
                "analytics is enabled but analytics.log_path is not set; events will be dropped",
            )]
        } else {
            Vec::new()
        }
    }
}
