//! Data models for garden beds, plants and harvests.
//!
//! Ownership is strictly hierarchical: a [`GardenBed`] owns its [`Plant`]s
//! and a plant owns its [`Harvest`]s and [`PlantImage`]s. Child records hold
//! the parent ID as a plain foreign reference used for lookup and cascade
//! only. Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use garden_core::models::{Harvest, HarvestUnit};
//! use jiff::{civil::date, Timestamp};
//!
//! let harvest = Harvest {
//!     id: 1,
//!     plant_id: 7,
//!     harvest_date: date(2024, 7, 14),
//!     quantity: 16.0,
//!     unit: HarvestUnit::Oz,
//!     notes: None,
//!     created_at: Timestamp::now(),
//! };
//! assert_eq!(harvest.pounds(), 1.0);
//! assert_eq!(harvest.month_key(), "2024-07");
//! ```

pub mod bed;
pub mod filters;
pub mod harvest;
pub mod plant;
pub mod status;
pub mod summary;


pub use bed::GardenBed;
pub use filters::PlantFilter;
pub use harvest::{Harvest, HarvestUnit};
pub use plant::{BarcodeType, Plant, PlantImage, SeedPacket, DEFAULT_SPACE_REQUIRED};
pub use status::{PlantStatus, Season};
pub use summary::{
    BedStats, Chart, ChartSeries, DashboardMetrics, GardenStats, ProducerTotal, SeasonCounts,
    StatusCounts, SuccessRate,
};
