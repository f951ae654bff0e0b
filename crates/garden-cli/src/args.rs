use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BedCommands, HarvestCommands, PlantCommands, StatsCommands};

/// Garden journal: beds, plants, harvests and seasonal statistics
///
/// Records what grows where, moves each planting through its lifecycle
/// (planted, sprouted, flowering, harvesting, finished) and summarizes
/// harvests and bed usage per year.
#[derive(Parser)]
#[command(version, about, name = "garden")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/garden/garden.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the garden CLI
///
/// Without a command the dashboard for the current year is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage garden beds
    #[command(alias = "b")]
    Bed {
        #[command(subcommand)]
        command: BedCommands,
    },
    /// Manage plants and their lifecycle
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Record and review harvests
    #[command(alias = "h")]
    Harvest {
        #[command(subcommand)]
        command: HarvestCommands,
    },
    /// Garden statistics and chart data
    #[command(alias = "s")]
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
}
