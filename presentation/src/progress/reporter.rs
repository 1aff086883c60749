//! Progress reporting while a quote request is being submitted

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the intake endpoint is being called
///
/// When progress is disabled (`--quiet`) the spinner draws nothing.
pub struct SubmissionSpinner {
    bar: Option<ProgressBar>,
}

impl SubmissionSpinner {
    /// Start spinning with the given message, e.g. the forward label
    pub fn start(message: &str, show: bool) -> Self {
        if !show {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_prefix("Quote");
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Stop the spinner, leaving a one-line result behind
    pub fn finish(self, accepted: bool) {
        if let Some(bar) = self.bar {
            let message = if accepted {
                format!("{} {}", "v".green(), "Request sent")
            } else {
                format!("{} {}", "x".red(), "Request failed")
            };
            bar.finish_with_message(message);
        }
    }
}
