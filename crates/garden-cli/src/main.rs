//! Garden CLI
//!
//! Command-line interface for the garden journal: beds, plants, harvests
//! and statistics.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::Cli;
use garden_core::{params::YearQuery, GardenBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let mut builder = GardenBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    let garden = builder
        .build()
        .await
        .context("Failed to initialize garden")?;

    info!("Garden opened at {}", garden.database_path().display());

    let cli = Cli::new(garden, TerminalRenderer::new(!no_color, json));

    match command {
        Some(Bed { command }) => cli.handle_bed_command(command).await,
        Some(Plant { command }) => cli.handle_plant_command(command).await,
        Some(Harvest { command }) => cli.handle_harvest_command(command).await,
        Some(Stats { command }) => cli.handle_stats_command(command).await,
        None => cli.dashboard(&YearQuery::default()).await,
    }
}
