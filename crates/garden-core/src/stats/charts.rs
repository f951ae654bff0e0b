//! Chart-ready aggregates: harvest timeline, rankings and yearly totals.

use std::collections::{BTreeMap, BTreeSet};

use jiff::civil::Date;

use super::{month_of, GardenSnapshot, MIN_RANKED_QUANTITY};
use crate::models::{Chart, ChartSeries, ProducerTotal, SuccessRate};

/// Series name used when a chart has no data to show.
pub const NO_DATA_SERIES: &str = "No harvests";

/// Pounds harvested per month of `year`, one series per plant name.
///
/// All series share the same x-axis: the sorted months that have any
/// harvest. A plant with no harvest in one of those months gets 0 there.
/// With no harvests at all the chart holds a single zero point for the
/// month of `today`.
pub fn harvest_timeline(snapshot: &GardenSnapshot, year: i32, today: Date) -> Chart {
    let mut by_name: BTreeMap<&str, BTreeMap<String, f64>> = BTreeMap::new();
    let mut months: BTreeSet<String> = BTreeSet::new();
    let names = snapshot.plant_names();

    for harvest in snapshot.harvests_in_year(year) {
        let Some(&name) = names.get(&harvest.plant_id) else {
            continue;
        };
        let month = harvest.month_key();
        *by_name
            .entry(name)
            .or_default()
            .entry(month.clone())
            .or_insert(0.0) += harvest.pounds();
        months.insert(month);
    }

    let series = if by_name.is_empty() {
        vec![ChartSeries {
            name: NO_DATA_SERIES.to_string(),
            x: vec![month_of(today)],
            y: vec![0.0],
        }]
    } else {
        let x: Vec<String> = months.into_iter().collect();
        by_name
            .into_iter()
            .map(|(name, totals)| ChartSeries {
                name: name.to_string(),
                y: x
                    .iter()
                    .map(|m| totals.get(m).copied().unwrap_or(0.0))
                    .collect(),
                x: x.clone(),
            })
            .collect()
    };

    Chart {
        title: format!("Harvest Timeline {year}"),
        x_label: "Month".to_string(),
        y_label: "Pounds".to_string(),
        series,
    }
}

/// Share of each plant name that reached HARVESTING or FINISHED, best
/// first. Names with fewer than [`MIN_RANKED_QUANTITY`] plants are left out.
/// `year` limits the plants considered to that tracking year.
pub fn success_rate_ranking(snapshot: &GardenSnapshot, year: Option<i32>) -> Vec<SuccessRate> {
    let mut by_name: BTreeMap<&str, (u64, u64)> = BTreeMap::new();

    for plant in snapshot
        .plants
        .iter()
        .filter(|p| year.map_or(true, |y| p.year == y))
    {
        let quantity = u64::from(plant.quantity);
        let (successful, total) = by_name.entry(plant.name.as_str()).or_default();
        *total += quantity;
        if plant.status.is_productive() {
            *successful += quantity;
        }
    }

    let mut ranking: Vec<SuccessRate> = by_name
        .into_iter()
        .filter(|(_, (_, total))| *total >= MIN_RANKED_QUANTITY)
        .map(|(name, (successful, total))| SuccessRate {
            name: name.to_string(),
            successful,
            total,
            rate: successful as f64 / total as f64 * 100.0,
        })
        .collect();

    // Stable sort keeps names alphabetical among equal rates
    ranking.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    ranking
}

/// Pounds harvested per plant name in `year`, largest first.
///
/// When the year has no harvests the result is a single placeholder row
/// with a total of 0.
pub fn top_producers(snapshot: &GardenSnapshot, year: i32) -> Vec<ProducerTotal> {
    let mut by_name: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    let names = snapshot.plant_names();

    for harvest in snapshot.harvests_in_year(year) {
        let Some(&name) = names.get(&harvest.plant_id) else {
            continue;
        };
        let (pounds, count) = by_name.entry(name).or_default();
        *pounds += harvest.pounds();
        *count += 1;
    }

    if by_name.is_empty() {
        return vec![ProducerTotal {
            name: NO_DATA_SERIES.to_string(),
            total_pounds: 0.0,
            harvest_count: 0,
        }];
    }

    let mut producers: Vec<ProducerTotal> = by_name
        .into_iter()
        .map(|(name, (total_pounds, harvest_count))| ProducerTotal {
            name: name.to_string(),
            total_pounds,
            harvest_count,
        })
        .collect();

    producers.sort_by(|a, b| b.total_pounds.total_cmp(&a.total_pounds));
    producers
}

/// Plant quantity per tracking year, oldest first. With no plants the chart
/// holds a single zero point for `current_year`.
pub fn plants_by_year_chart(snapshot: &GardenSnapshot, current_year: i32) -> Chart {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for plant in &snapshot.plants {
        *by_year.entry(plant.year).or_insert(0) += u64::from(plant.quantity);
    }
    if by_year.is_empty() {
        by_year.insert(current_year, 0);
    }

    let (x, y) = by_year
        .into_iter()
        .map(|(year, quantity)| (year.to_string(), quantity as f64))
        .unzip();

    Chart {
        title: "Plants by Year".to_string(),
        x_label: "Year".to_string(),
        y_label: "Plants".to_string(),
        series: vec![ChartSeries {
            name: "Plants".to_string(),
            x,
            y,
        }],
    }
}
