//! Commander-Harvest main entry point
//!
//! This is the command-line interface for the commander dataset harvester.

use anyhow::Context;
use clap::Parser;
use commander_harvest::config::{load_config_with_hash, validate, Config};
use commander_harvest::run_harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Commander-Harvest: builds the commander dataset from the remote catalog
///
/// Walks the paginated commander list, fetches the average deck of every
/// commander, and writes one JSON file sorted by popularity.
#[derive(Parser, Debug)]
#[command(name = "commander-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Fetch all commander decks into a single dataset", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Delay between requests in seconds
    #[arg(long, value_name = "SECONDS")]
    delay: Option<f64>,

    /// Skip fetching slugs, use the cached slugs file
    #[arg(long)]
    skip_fetch_slugs: bool,

    /// File to cache commander slugs
    #[arg(long, value_name = "PATH")]
    slugs_file: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;

    tracing::info!("Output: {}", config.output.output_path);
    tracing::info!("Delay between requests: {}ms", config.crawler.delay_ms);

    let outcome = run_harvest(&config, cli.skip_fetch_slugs)
        .await
        .context("Harvest failed")?;

    if outcome.succeeded == 0 {
        tracing::warn!("No commanders were fetched; wrote an empty dataset");
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("commander_harvest=info,warn"),
            1 => EnvFilter::new("commander_harvest=debug,info"),
            2 => EnvFilter::new("commander_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.output_path = output.clone();
    }

    if let Some(slugs_file) = &cli.slugs_file {
        config.output.slugs_path = slugs_file.clone();
    }

    if let Some(delay) = cli.delay {
        anyhow::ensure!(
            delay.is_finite() && delay >= 0.0,
            "--delay must be a non-negative number of seconds, got {}",
            delay
        );
        config.crawler.delay_ms = (delay * 1000.0).round() as u64;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}
