//! Configuration file loading for haul-quote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HAUL_QUOTE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./haul-quote.toml` or `./.haul-quote.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/haul-quote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileAnalyticsConfig, FileConfig, FileIntakeConfig, FileOutputConfig};
pub use loader::ConfigLoader;
