//! Quantity breakdowns, space utilization and year discovery.

use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use super::GardenSnapshot;
use crate::{
    error::{GardenError, Result},
    models::{BedStats, GardenStats, Plant, SeasonCounts, StatusCounts},
};

#[derive(Default)]
struct Tally {
    total: u64,
    by_status: StatusCounts,
    by_season: SeasonCounts,
    by_year: BTreeMap<i32, u64>,
    space_used: u64,
}

impl Tally {
    fn of<'a>(plants: impl IntoIterator<Item = &'a Plant>) -> Self {
        let mut tally = Tally::default();
        for plant in plants {
            let quantity = u64::from(plant.quantity);
            tally.total += quantity;
            tally.by_status.add(plant.status, quantity);
            if let Some(season) = plant.season {
                tally.by_season.add(season, quantity);
            }
            *tally.by_year.entry(plant.year).or_insert(0) += quantity;
            tally.space_used += plant.space_used();
        }
        tally
    }
}

/// Formats `used / area` as a one-decimal percentage, or `N/A` when the
/// area is unknown.
///
/// ```rust
/// use garden_core::stats::space_utilization;
///
/// assert_eq!(space_utilization(16, Some(32)), "50.0%");
/// assert_eq!(space_utilization(16, None), "N/A");
/// ```
pub fn space_utilization(used: u64, area: Option<u64>) -> String {
    match area {
        Some(area) if area > 0 => format!("{:.1}%", used as f64 / area as f64 * 100.0),
        _ => "N/A".to_string(),
    }
}

/// Garden-wide breakdown of every plant.
pub fn overall_stats(snapshot: &GardenSnapshot) -> GardenStats {
    let tally = Tally::of(&snapshot.plants);
    GardenStats {
        total_plants: tally.total,
        plants_by_status: tally.by_status,
        plants_by_season: tally.by_season,
        plants_by_year: tally.by_year,
    }
}

/// Breakdown and space utilization of one bed, optionally limited to
/// plants of `year`.
pub fn bed_stats(snapshot: &GardenSnapshot, bed_id: u64, year: Option<i32>) -> Result<BedStats> {
    let bed = snapshot
        .beds
        .iter()
        .find(|b| b.id == bed_id)
        .ok_or(GardenError::BedNotFound { id: bed_id })?;

    let tally = Tally::of(
        snapshot
            .plants
            .iter()
            .filter(|p| p.bed_id == bed_id)
            .filter(|p| year.map_or(true, |y| p.year == y)),
    );

    let area = bed.area();
    if area.is_none() {
        warn!(
            "Bed {} has unparseable dimensions '{}'; utilization unavailable",
            bed.id, bed.dimensions
        );
    }

    Ok(BedStats {
        bed_id: bed.id,
        bed_name: bed.name.clone(),
        dimensions: bed.dimensions.clone(),
        year,
        total_plants: tally.total,
        total_space_used: tally.space_used,
        total_bed_space: area,
        space_utilization: space_utilization(tally.space_used, area),
        plants_by_status: tally.by_status,
        plants_by_season: tally.by_season,
        plants_by_year: tally.by_year,
    })
}

/// Years worth offering as filters, newest first: every year with a plant
/// in an existing bed plus the current and next year.
pub fn available_years(snapshot: &GardenSnapshot, current_year: i32) -> Vec<i32> {
    let mut years: BTreeSet<i32> = [current_year, current_year + 1].into_iter().collect();

    if !snapshot.beds.is_empty() {
        let bed_ids: BTreeSet<u64> = snapshot.beds.iter().map(|b| b.id).collect();
        years.extend(
            snapshot
                .plants
                .iter()
                .filter(|p| bed_ids.contains(&p.bed_id))
                .map(|p| p.year),
        );
    }

    years.into_iter().rev().collect()
}
