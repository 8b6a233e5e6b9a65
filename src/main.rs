//! Overlay Studio - Control panel for live stream overlays
//!
//! Edit Bible, lyrics, presenter, ticker and image overlays and watch
//! them on a live preview canvas.

mod config;
mod dashboard;
mod editor;
mod media;
mod overlay;
mod preview;
mod shared;
mod storage;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::overlay::OverlaySet;

/// Overlay Studio - live stream overlay control panel
#[derive(Parser, Debug)]
#[command(name = "overlay-studio")]
#[command(about = "Control panel for Bible, lyrics, presenter, ticker and image stream overlays")]
struct Args {
    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the default overlay state as JSON and exit
    #[arg(long)]
    print_state: bool,

    /// Write the effective configuration back to the config file and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.print_state {
        println!("{}", serde_json::to_string_pretty(&OverlaySet::default())?);
        return Ok(());
    }

    let config_path = match args.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    // Report config loading with env/default filtering; the configured level applies after
    let config = tracing::subscriber::with_default(build_subscriber("info"), || {
        config::load_or_default(&config_path)
    });
    tracing::subscriber::set_global_default(build_subscriber(&config.logging.level))?;

    if args.write_config {
        config::save_config(&config, &config_path)
            .with_context(|| format!("Could not write {}", config_path.display()))?;
        println!("Wrote configuration to {}", config_path.display());
        return Ok(());
    }

    run(config)
}

/// `RUST_LOG` wins over the configured level
fn build_subscriber(level: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    FmtSubscriber::builder().with_env_filter(filter).finish()
}

fn run(config: AppConfig) -> Result<()> {
    info!("Overlay Studio starting...");
    info!(
        "Preview canvas {}x{}, up to {} images",
        config.preview.canvas_width, config.preview.canvas_height, config.images.max_images
    );

    // Run the dashboard (blocking)
    if let Err(e) = dashboard::app::run_dashboard(config) {
        tracing::error!("Dashboard error: {}", e);
    }

    info!("Overlay Studio shutdown complete");
    Ok(())
}
