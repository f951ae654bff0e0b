//! Statistics and aggregation engine.
//!
//! Every aggregate is a pure function over a [`GardenSnapshot`], the
//! committed entity set read in one transaction by
//! [`Database::load_snapshot`](crate::db::Database::load_snapshot). Nothing
//! is cached between calls. Functions that depend on the calendar take the
//! current year or date as an argument.
//!
//! Counts sum plant `quantity`, never rows. Harvest weights are normalized
//! to pounds before they are summed.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{GardenBed, Harvest, Plant};

pub mod charts;
pub mod counts;
pub mod metrics;


pub use charts::{harvest_timeline, plants_by_year_chart, success_rate_ranking, top_producers};
pub use counts::{available_years, bed_stats, overall_stats, space_utilization};
pub use metrics::dashboard_metrics;

/// Minimum total quantity planted under a name for it to be ranked.
pub const MIN_RANKED_QUANTITY: u64 = 5;

/// All beds, plants and harvests as of one committed state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenSnapshot {
    pub beds: Vec<GardenBed>,
    pub plants: Vec<Plant>,
    pub harvests: Vec<Harvest>,
}

impl GardenSnapshot {
    /// Plants whose tracking year is `year`.
    pub fn plants_in_year(&self, year: i32) -> impl Iterator<Item = &Plant> + '_ {
        self.plants.iter().filter(move |p| p.year == year)
    }

    /// Harvests dated in calendar year `year`.
    pub fn harvests_in_year(&self, year: i32) -> impl Iterator<Item = &Harvest> + '_ {
        self.harvests
            .iter()
            .filter(move |h| i32::from(h.harvest_date.year()) == year)
    }

    /// Plant names keyed by plant ID. Build once per aggregate.
    pub fn plant_names(&self) -> BTreeMap<u64, &str> {
        self.plants
            .iter()
            .map(|p| (p.id, p.name.as_str()))
            .collect()
    }
}

/// Rounds to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `YYYY-MM` key of a date.
pub(crate) fn month_of(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}
