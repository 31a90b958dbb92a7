use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{Config, MockSource, Units, dashboard};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set the default location and display units interactively.
    Configure,

    /// Show current conditions and the 5-day forecast.
    Show {
        /// Location name; falls back to the configured default.
        location: Option<String>,

        /// Print the dashboard data as JSON instead of rendering it.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, json } => show(location, json).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let location = inquire::Text::new("Default location:")
        .with_initial_value(config.default_location.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read default location")?;

    let units = inquire::Select::new("Display units:", Units::all().to_vec())
        .prompt()
        .context("Failed to read display units")?;

    config.set_default_location(Some(location));
    config.units = units;
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(location: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;

    let location = match location {
        Some(location) => location,
        None => config.default_location()?.to_string(),
    };

    let source = MockSource;
    let dashboard = dashboard::load(&source, &location).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        print!("{}", render::render_dashboard(&dashboard, config.units));
    }

    Ok(())
}
