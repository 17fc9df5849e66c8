//! namecheck - Artist Name Availability Checker
//!
//! Reads a list of candidate names, probes every configured source for each
//! of them and writes JSON, CSV and text reports sorted from most to least
//! available.

use anyhow::{Context, Result};
use clap::Parser;
use namecheck::names::{clean_path_input, load_names};
use namecheck::report::{ReportLayout, ReportWriter};
use namecheck::{BatchRunner, NameChecker};
use namecheck_common::config::{ConfigResolver, ConfigSource};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for namecheck
#[derive(Parser, Debug)]
#[command(name = "namecheck")]
#[command(about = "Check whether artist names are already taken")]
#[command(version)]
struct Args {
    /// Text file with one candidate name per line (prompted for if omitted)
    names_file: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "NAMECHECK_CONFIG")]
    config: Option<PathBuf>,

    /// Directory for the report files (overrides the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolved before tracing starts: the log level comes from the config
    let (mut config, config_source) = ConfigResolver::new(args.config.clone())
        .resolve()
        .context("Failed to load configuration")?;
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting namecheck {}", env!("CARGO_PKG_VERSION"));
    match config_source {
        ConfigSource::BuiltIn(None) => warn!("Configuration: {}", config_source),
        _ => info!("Configuration: {}", config_source),
    }

    let names_file = match args.names_file {
        Some(path) => path,
        None => prompt_names_file().context("Failed to read names list path")?,
    };
    let names = load_names(&names_file)?;

    let checker = NameChecker::from_config(&config).context("Failed to initialize probes")?;
    info!(
        probe_calls_per_name = checker.registry().call_count(),
        timeout_secs = config.probes.timeout_secs,
        "Probes ready"
    );

    let runner = BatchRunner::new(checker, config.concurrency.max_names_in_flight);
    let results = runner.run(&names).await;

    let layout = ReportLayout {
        tlds: config.probes.tlds.clone(),
        platforms: config
            .probes
            .social_platforms
            .iter()
            .map(|p| p.name.clone())
            .collect(),
    };
    let writer = ReportWriter::new(&config.output_dir, layout);
    let paths = writer
        .write_all(&results, chrono::Local::now().naive_local())
        .context("Failed to write reports")?;

    for result in results.iter().filter(|r| r.status.is_free()) {
        info!("{}", namecheck::report::text::line(result));
    }
    info!("Reports: {}", paths.text.display());

    Ok(())
}

/// Ask for the names file on stdin
fn prompt_names_file() -> Result<PathBuf> {
    print!("Names List (.txt)> ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;

    Ok(clean_path_input(&line))
}
