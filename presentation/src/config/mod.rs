//! Presentation-level configuration
//!
//! Configuration for terminal output behavior.

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while the request is being submitted
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color preference to all terminal output
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
