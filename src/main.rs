//! Actions Dashboard - GitHub Actions health at a glance
//!
//! CLI entry point.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use actions_dashboard::cli::{parse_lookback, render_dashboard, DashboardView};
use actions_dashboard::config::DashboardConfig;
use actions_dashboard::dashboard::layout::cards_per_row;
use actions_dashboard::dashboard::{collect_all, Selection};
use actions_dashboard::github::GhClient;
use actions_dashboard::terminal::resolve_width;

/// GitHub Actions dashboard
///
/// Prints run health, average elapsed time and billable time for every
/// workflow in an organization's or user's repositories.
#[derive(Parser, Debug)]
#[command(name = "actions-dashboard", version, about)]
struct Cli {
    /// Organization or user name
    selector: String,

    /// One or more repository names from the provided org or user
    #[arg(short, long, value_delimiter = ',')]
    repos: Vec<String>,

    /// Period of time to cover in hours (eg 1h) or days (eg 30d)
    #[arg(short, long, default_value = "30d")]
    last: String,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Terminal width to lay out for (detected when omitted)
    #[arg(long)]
    width: Option<usize>,
}

/// Cards per row for the given width, never less than one.
fn resolve_cards_per_row(terminal_width: usize, card_width: usize) -> NonZeroUsize {
    cards_per_row(terminal_width, card_width).unwrap_or_else(|| {
        warn!(
            terminal_width,
            card_width, "terminal too narrow for the card grid, using one card per row"
        );
        NonZeroUsize::MIN
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let window = parse_lookback(&cli.last).context("failed to parse arguments")?;
    let config = DashboardConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let terminal_width = resolve_width(cli.width)?;

    let client = GhClient::new(&config.gh_binary, &config.api_cache);
    let selection = Selection {
        owner: cli.selector.clone(),
        repositories: cli.repos,
    };

    let repositories = collect_all(&client, &selection, window, chrono::Utc::now())
        .await
        .context("could not fetch repository data")?;

    let view = DashboardView {
        owner: cli.selector,
        window,
        terminal_width,
        cards_per_row: resolve_cards_per_row(terminal_width, config.card_width()),
        max_runs: config.max_runs,
        name_length: config.workflow_name_length,
    };

    print!("{}", render_dashboard(&repositories, &view));

    Ok(())
}
