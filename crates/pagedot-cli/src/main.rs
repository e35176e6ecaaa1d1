use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagedot_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagedot")]
#[command(version, about = "A terminal pager demo built around an animated page-indicator strip")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Animation style (see `pagedot styles`)
    #[arg(short, long)]
    style: Option<String>,

    /// Number of demo pages
    #[arg(short, long)]
    count: Option<usize>,

    /// Enable interactive scrubbing from the start
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo pager
    Run,
    /// List the available animation styles
    Styles,
}

fn main() -> Result<()> {
    // Initialize logging; stderr so a TUI session stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration, then apply CLI overrides on top
    let mut config = AppConfig::load()?;
    if let Some(style) = cli.style {
        config.indicator.animation = style;
    }
    if let Some(count) = cli.count {
        config.ui.pages = count;
    }
    if cli.interactive {
        config.indicator.interactive = true;
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Styles) => commands::styles::run(),
    }
}
