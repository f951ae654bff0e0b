//! Async façade over the garden database.
//!
//! [`Garden`] is the entry point used by request-handling layers. Each
//! operation opens its own connection on a blocking worker thread, runs one
//! unit of work, and returns typed results; there are no background tasks
//! and no state is cached between calls.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  CLI / caller   │    │     Garden      │    │    Database     │
//! │   (async)       │───▶│ (spawn_blocking)│───▶│   (rusqlite)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use garden_core::{
//!     params::{AddHarvest, CreateBed, CreatePlant, TransitionStatus},
//!     models::{HarvestUnit, PlantStatus},
//!     GardenBuilder,
//! };
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let garden = GardenBuilder::new()
//!     .with_database_path("/tmp/garden-doc.db")
//!     .build()
//!     .await?;
//!
//! let bed = garden
//!     .create_bed(&CreateBed {
//!         name: "Herbs".to_string(),
//!         dimensions: "3x6".to_string(),
//!         notes: None,
//!     })
//!     .await?;
//!
//! let mut params = CreatePlant::new("Basil", date(2025, 4, 20), bed.location());
//! params.status = Some(PlantStatus::Flowering);
//! let plant = garden.create_plant(&params).await?;
//!
//! // A FLOWERING plant moves to HARVESTING with its first harvest
//! garden
//!     .record_harvest(&AddHarvest {
//!         plant_id: plant.id,
//!         harvest_date: date(2025, 7, 1),
//!         quantity: 4.0,
//!         unit: HarvestUnit::Oz,
//!         notes: None,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{GardenError, Result},
};

pub mod bed_ops;
pub mod builder;
pub mod harvest_ops;
pub mod plant_ops;
pub mod stats_ops;


pub use builder::GardenBuilder;

/// Main interface for managing beds, plants and harvests.
pub struct Garden {
    pub(crate) db_path: PathBuf,
}

impl Garden {
    /// Creates a garden backed by the database at `db_path`.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the backing database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `work` against a fresh connection on a blocking worker.
    async fn with_database<T, F>(&self, work: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            work(&mut db)
        })
        .await
        .map_err(|e| GardenError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
