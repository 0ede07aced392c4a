//! cardlist - product card browser
//!
//! Run without a subcommand to launch the TUI, or use `list` to print a
//! single page to stdout.

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cardlist::cli::commands::{Cli, Commands};
use cardlist::cli::{config, list};
use cardlist::core::catalog::{Catalog, DataSource};
use cardlist::core::config::Config;
use cardlist::error::{CardListError, Result};
use cardlist::tui::App;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // No subcommand - launch TUI mode
        None => {
            let source = resolve_source(cli.data.as_deref())?;
            run_tui(&source).await
        }

        // Config commands don't need any product data
        Some(Commands::Config(args)) => config::handle_config(args.command),

        Some(Commands::List(args)) => {
            let source = resolve_source(cli.data.as_deref())?;
            list::handle_list(&source, args)
        }
    }
}

/// Use `--data` when given, otherwise the configured data file
fn resolve_source(data: Option<&Path>) -> Result<DataSource> {
    match data {
        Some(path) => Ok(DataSource::from_arg(path)),
        None => DataSource::resolve(None, &Config::load()?),
    }
}

/// Run the TUI application
async fn run_tui(source: &DataSource) -> Result<()> {
    // Raw mode would swallow the JSON on stdin
    if *source == DataSource::Stdin {
        return Err(CardListError::InvalidInput(
            "The TUI cannot read products from stdin.\n\n  → Pass a file with '--data <PATH>', or use 'cardlist list --data -'.".to_string(),
        ));
    }

    let tick_rate_ms = Config::load()
        .map(|c| c.tick_rate_ms)
        .unwrap_or_else(|e| {
            warn!("Using default tick rate: {}", e);
            Config::default().tick_rate_ms
        });

    let catalog = Catalog::load(source)?;
    let mut app = App::new(catalog).with_tick_rate(Duration::from_millis(tick_rate_ms));
    app.run().await
}
