//! Site-Path-Crawler main entry point
//!
//! This is the command-line interface for the same-origin site crawler.

use anyhow::{Context, Result};
use clap::Parser;
use site_path_crawler::config::{load_config, Config};
use site_path_crawler::crawler::run_crawl;
use site_path_crawler::output::print_summary;
use site_path_crawler::ConfigError;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Path-Crawler: a same-origin breadth-first site crawler
///
/// Starts at the seed URL, saves every HTML page it can fetch to the output
/// directory, and follows links that stay on the seed's host until the page
/// budget is used up or no unvisited links remain.
#[derive(Parser, Debug)]
#[command(name = "site-path-crawler")]
#[command(version)]
#[command(about = "A same-origin breadth-first site crawler", long_about = None)]
struct Cli {
    /// Target domain or URL (e.g. example.com or https://example.com/docs)
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Directory that receives the saved pages [default: output]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Maximum number of pages to save [default: 500]
    #[arg(short = 'n', long, value_name = "COUNT")]
    max_pages: Option<usize>,

    /// Pause between requests in milliseconds [default: 250]
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "AGENT")]
    user_agent: Option<String>,

    /// Path to a TOML configuration file; flags override its values
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Do not draw the spinner on stderr
    #[arg(long)]
    no_spinner: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, &cli);

    if config.crawl.seed_url.is_none() && !cli.quiet && std::io::stdin().is_terminal() {
        prompt_for_target(&mut config, cli.output_dir.is_none())?;
    }

    if config.crawl.seed_url.is_none() {
        tracing::error!("No domain entered. Exiting.");
        return Err(ConfigError::MissingSeed.into());
    }

    if cli.quiet || cli.no_spinner || !std::io::stderr().is_terminal() {
        config.crawl.status_indicator = false;
    }

    let summary = run_crawl(config).await?;

    if !cli.quiet {
        println!();
        print_summary(&summary);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_path_crawler=info,warn"),
            1 => EnvFilter::new("site_path_crawler=debug,info"),
            2 => EnvFilter::new("site_path_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Layers command-line flags over the loaded configuration
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(seed) = &cli.seed {
        config.crawl.seed_url = Some(seed.clone());
    }
    if let Some(output_dir) = &cli.output_dir {
        config.crawl.output_dir = output_dir.clone();
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawl.max_pages = max_pages;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.crawl.delay_ms = delay_ms;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.http.timeout_secs = timeout_secs;
    }
    if let Some(user_agent) = &cli.user_agent {
        config.http.user_agent = user_agent.clone();
    }
}

/// Asks for the seed (and optionally the output directory) on the terminal
///
/// An empty answer for the seed leaves it unset; an empty answer for the
/// output directory keeps the configured one.
fn prompt_for_target(config: &mut Config, ask_output_dir: bool) -> Result<()> {
    const EXAMPLE: &str = "https://example.com";

    print_banner(EXAMPLE);

    let seed = prompt(&format!(
        "Enter target domain or URL (example: {}): ",
        EXAMPLE
    ))?;
    if seed.is_empty() {
        return Ok(());
    }
    config.crawl.seed_url = Some(seed);

    if ask_output_dir {
        let output_dir = prompt(&format!(
            "Enter output directory name (default: {}): ",
            config.crawl.output_dir
        ))?;
        if !output_dir.is_empty() {
            config.crawl.output_dir = output_dir;
        }
    }

    Ok(())
}

fn prompt(question: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", question).context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush prompt")?;

    let mut answer = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    Ok(answer.trim().to_string())
}

fn print_banner(example: &str) {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  SITE PATH CRAWLER");
    println!("║  Example: {}", example);
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
}
