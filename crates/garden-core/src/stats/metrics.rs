//! Dashboard metrics: one year against the year before.

use log::warn;

use super::{round1, GardenSnapshot};
use crate::models::DashboardMetrics;

/// Percent change from `prior` to `current`, or 0 when there is no prior
/// value to compare against.
fn percent_change(current: f64, prior: f64) -> f64 {
    if prior == 0.0 {
        0.0
    } else {
        round1((current - prior) / prior * 100.0)
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        round1(part / whole * 100.0)
    }
}

/// Space used by the year's plants as a percentage of the total area of
/// beds with parseable dimensions.
fn utilization_in_year(snapshot: &GardenSnapshot, year: i32) -> f64 {
    let mut used = 0u64;
    let mut area = 0u64;

    for bed in &snapshot.beds {
        let Some(bed_area) = bed.area() else {
            warn!(
                "Skipping bed {} with unparseable dimensions '{}'",
                bed.id, bed.dimensions
            );
            continue;
        };
        area += bed_area;
        used += snapshot
            .plants_in_year(year)
            .filter(|p| p.bed_id == bed.id)
            .map(|p| p.space_used())
            .sum::<u64>();
    }

    percentage(used as f64, area as f64)
}

fn total_in_year(snapshot: &GardenSnapshot, year: i32) -> u64 {
    snapshot
        .plants_in_year(year)
        .map(|p| u64::from(p.quantity))
        .sum()
}

/// Computes the dashboard for `year`, with trends against `year - 1`.
pub fn dashboard_metrics(snapshot: &GardenSnapshot, year: i32) -> DashboardMetrics {
    let prior_year = year - 1;

    let total_plants = total_in_year(snapshot, year);
    let prior_total = total_in_year(snapshot, prior_year);

    let active_plants: u64 = snapshot
        .plants_in_year(year)
        .filter(|p| p.status.is_active())
        .map(|p| u64::from(p.quantity))
        .sum();

    let harvest_count = snapshot.harvests_in_year(year).count() as u64;
    let prior_harvest_count = snapshot.harvests_in_year(prior_year).count() as u64;

    let space_utilization = utilization_in_year(snapshot, year);
    let prior_utilization = utilization_in_year(snapshot, prior_year);

    DashboardMetrics {
        year,
        total_plants,
        total_plants_trend: percent_change(total_plants as f64, prior_total as f64),
        active_plants,
        active_percentage: percentage(active_plants as f64, total_plants as f64),
        harvest_count,
        harvest_trend: percent_change(harvest_count as f64, prior_harvest_count as f64),
        space_utilization,
        space_utilization_trend: round1(space_utilization - prior_utilization),
    }
}
