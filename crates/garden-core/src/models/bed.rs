//! Garden bed model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plant;
use crate::validation;

/// A physical garden plot with fixed dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GardenBed {
    /// Unique identifier for the bed
    pub id: u64,

    /// Display name of the bed
    pub name: String,

    /// Dimensions encoded as `LxW` in feet
    pub dimensions: String,

    /// Free-text notes
    pub notes: Option<String>,

    /// Timestamp when the bed was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the bed was last modified (UTC)
    pub updated_at: Timestamp,

    /// Plants growing in the bed (loaded for single-bed lookups)
    #[serde(default)]
    pub plants: Vec<Plant>,
}

impl GardenBed {
    /// Bed area in square feet, or `None` when the stored dimensions do not
    /// parse as two positive integers.
    pub fn area(&self) -> Option<u64> {
        validation::parse_dimensions(&self.dimensions)
            .ok()
            .map(|(length, width)| u64::from(length) * u64::from(width))
    }

    /// Human-readable reference used when creating plants in this bed.
    pub fn location(&self) -> String {
        validation::format_location(self.id)
    }
}
