//! Aggregate result types produced by the statistics engine.
//!
//! Every count in these structures sums plant `quantity`, never rows: a
//! single plant record with quantity 5 contributes 5.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{PlantStatus, Season};

/// Quantity per lifecycle status. Every status is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    #[serde(rename = "PLANTED")]
    pub planted: u64,
    #[serde(rename = "SPROUTED")]
    pub sprouted: u64,
    #[serde(rename = "FLOWERING")]
    pub flowering: u64,
    #[serde(rename = "HARVESTING")]
    pub harvesting: u64,
    #[serde(rename = "FINISHED")]
    pub finished: u64,
}

impl StatusCounts {
    fn slot(&mut self, status: PlantStatus) -> &mut u64 {
        match status {
            PlantStatus::Planted => &mut self.planted,
            PlantStatus::Sprouted => &mut self.sprouted,
            PlantStatus::Flowering => &mut self.flowering,
            PlantStatus::Harvesting => &mut self.harvesting,
            PlantStatus::Finished => &mut self.finished,
        }
    }

    /// Adds `quantity` to the bucket for `status`.
    pub fn add(&mut self, status: PlantStatus, quantity: u64) {
        *self.slot(status) += quantity;
    }

    /// Quantity recorded for `status`.
    pub fn get(&self, status: PlantStatus) -> u64 {
        match status {
            PlantStatus::Planted => self.planted,
            PlantStatus::Sprouted => self.sprouted,
            PlantStatus::Flowering => self.flowering,
            PlantStatus::Harvesting => self.harvesting,
            PlantStatus::Finished => self.finished,
        }
    }

    /// All buckets in lifecycle order.
    pub fn iter(&self) -> impl Iterator<Item = (PlantStatus, u64)> + '_ {
        PlantStatus::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Sum over all buckets.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, n)| n).sum()
    }
}

/// Quantity per season. Every season is always present.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonCounts {
    #[serde(rename = "SPRING")]
    pub spring: u64,
    #[serde(rename = "SUMMER")]
    pub summer: u64,
    #[serde(rename = "FALL")]
    pub fall: u64,
    #[serde(rename = "WINTER")]
    pub winter: u64,
}

impl SeasonCounts {
    /// Adds `quantity` to the bucket for `season`.
    pub fn add(&mut self, season: Season, quantity: u64) {
        let slot = match season {
            Season::Spring => &mut self.spring,
            Season::Summer => &mut self.summer,
            Season::Fall => &mut self.fall,
            Season::Winter => &mut self.winter,
        };
        *slot += quantity;
    }

    /// Quantity recorded for `season`.
    pub fn get(&self, season: Season) -> u64 {
        match season {
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Fall => self.fall,
            Season::Winter => self.winter,
        }
    }

    /// All buckets in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Season, u64)> + '_ {
        Season::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Garden-wide plant counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GardenStats {
    pub total_plants: u64,
    pub plants_by_status: StatusCounts,
    pub plants_by_season: SeasonCounts,
    pub plants_by_year: BTreeMap<i32, u64>,
}

/// Counts and space utilization for a single bed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BedStats {
    pub bed_id: u64,
    pub bed_name: String,
    pub dimensions: String,
    /// Year filter the figures were computed with, if any
    pub year: Option<i32>,
    pub total_plants: u64,
    /// Sum of `quantity * space_required`
    pub total_space_used: u64,
    /// Bed area, when the dimensions parse
    pub total_bed_space: Option<u64>,
    /// Percentage with one decimal (`"50.0%"`) or `"N/A"`
    pub space_utilization: String,
    pub plants_by_status: StatusCounts,
    pub plants_by_season: SeasonCounts,
    pub plants_by_year: BTreeMap<i32, u64>,
}

/// Current-year dashboard figures with trends against the prior year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub year: i32,
    pub total_plants: u64,
    /// Percent change of `total_plants` against the prior year
    pub total_plants_trend: f64,
    /// Quantity of plants not yet finished
    pub active_plants: u64,
    /// `active_plants` as a percentage of `total_plants`
    pub active_percentage: f64,
    /// Number of harvest records dated in the year
    pub harvest_count: u64,
    /// Percent change of `harvest_count` against the prior year
    pub harvest_trend: f64,
    /// Space used as a percentage of total bed area
    pub space_utilization: f64,
    /// Percentage-point change of `space_utilization` against the prior year
    pub space_utilization_trend: f64,
}

/// One named series of a chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Chart-ready data: labelled axes and one or more series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

/// Success rate for one plant name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuccessRate {
    pub name: String,
    /// Quantity that reached HARVESTING or FINISHED
    pub successful: u64,
    /// Total quantity planted under the name
    pub total: u64,
    /// `successful / total * 100`
    pub rate: f64,
}

/// Unit-normalized harvest total for one plant name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProducerTotal {
    pub name: String,
    /// Total harvested, in pounds
    pub total_pounds: f64,
    pub harvest_count: u64,
}
