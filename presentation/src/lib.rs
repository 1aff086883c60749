//! Presentation layer for haul-quote
//!
//! This crate contains CLI definitions, output formatters,
//! the submission spinner, and the interactive quote wizard.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod wizard;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SubmissionSpinner;
pub use wizard::{ConsoleNavigator, WizardRepl};
