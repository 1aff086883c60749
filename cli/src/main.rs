//! CLI entrypoint for haul-quote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use haul_application::{AnalyticsSink, IntakeGateway, NoAnalytics, SubmitQuoteUseCase};
use haul_domain::{ConfigIssue, ConfigIssueCode, Severity};
use haul_infrastructure::{
    ConfigLoader, DryRunIntakeGateway, FileConfig, JsonlAnalyticsSink, WebhookIntakeGateway,
};
use haul_presentation::{Cli, OutputConfig, WizardRepl};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting haul-quote");

    // === Configuration ===
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };

    if let Some(endpoint) = &cli.endpoint {
        config.intake.endpoint = Some(endpoint.clone());
    }

    check_config(&config, cli.dry_run)?;

    let output = OutputConfig {
        color: config.output.color,
        show_progress: !cli.quiet,
    };
    output.apply();

    // === Dependency Injection ===
    let analytics = config
        .analytics
        .sink_path()
        .and_then(JsonlAnalyticsSink::new)
        .map(Arc::new);

    if cli.dry_run {
        let gateway = Arc::new(DryRunIntakeGateway);
        match analytics {
            Some(sink) => run_wizard(gateway, sink, output).await,
            None => run_wizard(gateway, Arc::new(NoAnalytics), output).await,
        }
    } else {
        let gateway = Arc::new(build_webhook(&config)?);
        match analytics {
            Some(sink) => run_wizard(gateway, sink, output).await,
            None => run_wizard(gateway, Arc::new(NoAnalytics), output).await,
        }
    }
}

/// Report configuration issues, failing on any error.
///
/// Endpoint problems are ignored in dry-run mode since nothing is sent.
fn check_config(config: &FileConfig, dry_run: bool) -> Result<()> {
    let issues: Vec<ConfigIssue> = config
        .validate()
        .into_iter()
        .filter(|issue| {
            !(dry_run
                && matches!(
                    issue.code,
                    ConfigIssueCode::MissingEndpoint | ConfigIssueCode::InvalidEndpoint { .. }
                ))
        })
        .collect();

    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("error: {}", issue.message),
        }
    }

    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration. Set intake.endpoint in haul-quote.toml or pass --endpoint.");
    }
    Ok(())
}

fn build_webhook(config: &FileConfig) -> Result<WebhookIntakeGateway> {
    let endpoint = config
        .intake
        .endpoint
        .as_deref()
        .map(str::trim)
        .context("intake.endpoint is not set")?;

    let mut gateway = WebhookIntakeGateway::new(endpoint);
    if let Some(token) = &config.intake.auth_token {
        gateway = gateway.with_auth_token(token);
    }
    if let Some(timeout) = config.intake.timeout() {
        gateway = gateway.with_timeout(timeout)?;
    }

    info!("Submitting to {}", gateway.endpoint());
    Ok(gateway)
}

async fn run_wizard<G, A>(gateway: Arc<G>, analytics: Arc<A>, output: OutputConfig) -> Result<()>
where
    G: IntakeGateway + 'static,
    A: AnalyticsSink + 'static,
{
    let use_case = SubmitQuoteUseCase::new(gateway, analytics);
    let mut repl = WizardRepl::new(use_case).with_output(output);

    let accepted = repl.run().await?;
    info!("Wizard finished (accepted: {})", accepted);

    // Let the detached analytics task run before the runtime shuts down
    if accepted {
        tokio::task::yield_now().await;
    }

    Ok(())
}
