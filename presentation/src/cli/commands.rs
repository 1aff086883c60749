//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for haul-quote
#[derive(Parser, Debug)]
#[command(name = "haul-quote")]
#[command(author, version, about = "Livestock hauling quote request wizard")]
#[command(long_about = r#"
Haul Quote walks you through a free livestock hauling quote request.

The wizard has five steps:
1. Livestock Details: type of animal and head count
2. Pickup Location: city, state and optional ZIP
3. Dropoff Location: city, state and optional ZIP
4. Timeline: when pickup is needed, plus optional notes
5. Contact Information: name, phone and email

The finished request is sent to the configured intake endpoint.

Configuration files are loaded from (in priority order):
1. HAUL_QUOTE_* environment variables (e.g. HAUL_QUOTE_INTAKE__ENDPOINT)
2. --config <path>        Explicit config file
3. ./haul-quote.toml      Project-level config
4. ~/.config/haul-quote/config.toml   Global config

Example:
  haul-quote --endpoint https://hooks.example.com/webhook/quote
  haul-quote --dry-run
"#)]
pub struct Cli {
    /// Intake endpoint URL (overrides intake.endpoint from config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the lead payload instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["haul-quote"]).unwrap();
        assert!(cli.endpoint.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "haul-quote",
            "--endpoint",
            "https://hooks.example.com/quote",
            "--dry-run",
            "-vv",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.endpoint.as_deref(), Some("https://hooks.example.com/quote"));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }
}
