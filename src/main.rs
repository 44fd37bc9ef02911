mod cli;
mod config;
mod models;
mod prayer_times;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;

use cli::args::{Cli, Commands};
use cli::handlers::{self, TimesOptions};
use config::AppConfig;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Fetches run on this runtime; the terminal loop itself stays synchronous.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Starting async runtime")?;

    match cli.command {
        Some(Commands::Times {
            country,
            city,
            adjust,
            target,
            json,
        }) => {
            handlers::handle_times(
                &config,
                &runtime,
                TimesOptions {
                    country: country.as_deref(),
                    city: city.as_deref(),
                    adjust,
                    target,
                    json,
                },
            )?;
        }
        Some(Commands::Locations { country }) => {
            handlers::handle_locations(country.as_deref())?;
        }
        Some(Commands::Init { force }) => {
            handlers::handle_init(force)?;
        }
        // No subcommand → launch TUI
        None => {
            tui::app::run(config, &runtime)?;
        }
    }

    Ok(())
}
