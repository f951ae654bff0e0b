//! # Garden Core
//!
//! Record keeping and statistics for a home garden: physical beds, the
//! plant batches growing in them, and the harvests taken from those plants.
//!
//! ## Features
//!
//! - **Beds, plants, harvests**: strictly hierarchical records with explicit
//!   cascading deletes
//! - **Lifecycle engine**: plants move one step at a time along
//!   PLANTED → SPROUTED → FLOWERING → HARVESTING → FINISHED
//! - **Atomic harvests**: recording the first harvest of a FLOWERING plant
//!   advances it to HARVESTING in the same transaction
//! - **Statistics**: quantity breakdowns, bed space utilization, dashboard
//!   trends and chart-ready series, with harvests normalized to pounds
//! - **SQLite persistence**: one transaction per operation
//!
//! ## Quick Start
//!
//! ```rust
//! use garden_core::{GardenBuilder, params::{CreateBed, YearQuery}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let garden = GardenBuilder::new()
//!     .with_database_path("/tmp/garden.db")
//!     .build()
//!     .await?;
//!
//! garden
//!     .create_bed(&CreateBed {
//!         name: "North Bed".to_string(),
//!         dimensions: "4x8".to_string(),
//!         notes: None,
//!     })
//!     .await?;
//!
//! let metrics = garden.dashboard_metrics(&YearQuery::default()).await?;
//! println!("{metrics}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`garden`]: async façade, the main entry point
//! - [`db`]: SQLite repository
//! - [`lifecycle`]: status transition table
//! - [`stats`]: aggregation engine
//! - [`validation`]: input rules shared by the repository
//! - [`models`], [`params`], [`display`], [`error`]

pub mod db;
pub mod display;
pub mod error;
pub mod garden;
pub mod lifecycle;
pub mod models;
pub mod params;
pub mod stats;
pub mod validation;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Beds, CreateResult, DeleteResult, Harvests, LocalDateTime, OperationStatus, Plants,
    UpdateResult,
};
pub use error::{GardenError, Result};
pub use garden::{Garden, GardenBuilder};
pub use models::{
    BarcodeType, GardenBed, Harvest, HarvestUnit, Plant, PlantFilter, PlantImage, PlantStatus,
    Season, SeedPacket,
};
pub use stats::GardenSnapshot;
