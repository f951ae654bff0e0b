//! Filter types for plant listing.

use serde::{Deserialize, Serialize};

use super::{PlantStatus, Season};
use crate::params::ListPlants;

/// Filter criteria for listing plants. Every populated field must match.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantFilter {
    /// Exact tracking year
    pub year: Option<i32>,

    /// Growing season
    pub season: Option<Season>,

    /// Lifecycle status
    pub status: Option<PlantStatus>,

    /// Owning bed
    pub bed_id: Option<u64>,
}

impl PlantFilter {
    /// Creates a filter scoped to a single bed.
    pub fn for_bed(bed_id: u64) -> Self {
        Self {
            bed_id: Some(bed_id),
            ..Default::default()
        }
    }

    /// Whether no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.season.is_none() && self.status.is_none() && self.bed_id.is_none()
    }
}

impl From<&ListPlants> for PlantFilter {
    fn from(params: &ListPlants) -> Self {
        Self {
            year: params.year,
            season: params.season,
            status: params.status,
            bed_id: params.bed_id,
        }
    }
}
