//! Parameter structures for garden operations.
//!
//! These structures are shared across interfaces without framework-specific
//! derives. Interface layers (the CLI today) define their own argument types
//! and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Garden      │
//! │  (clap derives) │───▶│ (serde only)    │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation happens in the core, not here: these types carry raw input
//! (quantities as `i64`, locations as text) so that malformed values reach
//! the repository rules and are rejected with a named field.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{HarvestUnit, PlantStatus, Season, SeedPacket};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for creating a garden bed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBed {
    pub name: String,
    /// `LxW` in feet, e.g. `4x8`
    pub dimensions: String,
    pub notes: Option<String>,
}

/// Parameters for replacing a garden bed's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBed {
    pub id: u64,
    pub name: String,
    pub dimensions: String,
    pub notes: Option<String>,
}

/// Parameters for creating a plant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlant {
    pub name: String,
    pub variety: Option<String>,
    pub planting_date: Date,
    /// Bed reference, `Bed N` or a bare `N`
    pub location: String,
    /// Initial status; defaults to PLANTED
    #[serde(default)]
    pub status: Option<PlantStatus>,
    #[serde(default)]
    pub season: Option<Season>,
    /// Tracking year; defaults to the current year
    #[serde(default)]
    pub year: Option<i32>,
    /// Defaults to 1
    #[serde(default)]
    pub quantity: Option<i64>,
    /// Defaults to 4
    #[serde(default)]
    pub space_required: Option<i64>,
    pub expected_harvest_date: Option<Date>,
    pub notes: Option<String>,
    #[serde(default)]
    pub seed_packet: Option<SeedPacket>,
}

impl CreatePlant {
    /// Minimal parameters; every optional field unset.
    pub fn new(name: impl Into<String>, planting_date: Date, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variety: None,
            planting_date,
            location: location.into(),
            status: None,
            season: None,
            year: None,
            quantity: None,
            space_required: None,
            expected_harvest_date: None,
            notes: None,
            seed_packet: None,
        }
    }
}

/// Parameters for listing plants. Every populated field narrows the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlants {
    pub year: Option<i32>,
    pub season: Option<Season>,
    pub status: Option<PlantStatus>,
    pub bed_id: Option<u64>,
}

/// Parameters for updating a plant's descriptive fields.
///
/// Status is deliberately absent; it changes only through
/// [`TransitionStatus`].
///
/// The nullable fields take `Option<Option<_>>`: `None` keeps the stored
/// value, `Some(None)` clears it and `Some(Some(v))` replaces it. In JSON an
/// absent key keeps and an explicit `null` clears.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePlant {
    pub id: u64,
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub variety: Option<Option<String>>,
    pub planting_date: Option<Date>,
    pub season: Option<Season>,
    pub year: Option<i32>,
    pub quantity: Option<i64>,
    pub space_required: Option<i64>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_harvest_date: Option<Option<Date>>,
    #[serde(
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    pub seed_packet: Option<SeedPacket>,
}

/// A present key, `null` included, becomes `Some`.
fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdatePlant {
    /// Whether no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.variety.is_none()
            && self.planting_date.is_none()
            && self.season.is_none()
            && self.year.is_none()
            && self.quantity.is_none()
            && self.space_required.is_none()
            && self.expected_harvest_date.is_none()
            && self.notes.is_none()
            && self.seed_packet.is_none()
    }
}

/// Parameters for advancing a plant's lifecycle status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransitionStatus {
    pub id: u64,
    pub status: PlantStatus,
}

/// Parameters for attaching photo metadata to a plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddPlantImage {
    pub plant_id: u64,
    pub url: String,
    pub description: Option<String>,
}

/// Parameters for recording a harvest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddHarvest {
    pub plant_id: u64,
    pub harvest_date: Date,
    pub quantity: f64,
    #[serde(default)]
    pub unit: HarvestUnit,
    pub notes: Option<String>,
}

/// Parameters identifying a harvest under its plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarvestRef {
    pub plant_id: u64,
    pub harvest_id: u64,
}

/// Parameters for per-bed statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BedStatsQuery {
    pub bed_id: u64,
    pub year: Option<i32>,
}

/// Optional year selector for statistics; unset means the current year
/// (or all years where the operation documents so).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearQuery {
    pub year: Option<i32>,
}
