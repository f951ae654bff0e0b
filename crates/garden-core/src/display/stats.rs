//! Display implementations for aggregate results.

use std::{collections::BTreeMap, fmt};

use crate::models::{
    BedStats, Chart, DashboardMetrics, GardenStats, ProducerTotal, SeasonCounts, StatusCounts,
    SuccessRate,
};

fn write_breakdown(
    f: &mut fmt::Formatter<'_>,
    by_status: &StatusCounts,
    by_season: &SeasonCounts,
    by_year: &BTreeMap<i32, u64>,
) -> fmt::Result {
    writeln!(f, "## By Status")?;
    writeln!(f)?;
    for (status, count) in by_status.iter() {
        writeln!(f, "- {}: {count}", status.with_icon())?;
    }

    writeln!(f)?;
    writeln!(f, "## By Season")?;
    writeln!(f)?;
    for (season, count) in by_season.iter() {
        writeln!(f, "- {season}: {count}")?;
    }

    if !by_year.is_empty() {
        writeln!(f)?;
        writeln!(f, "## By Year")?;
        writeln!(f)?;
        for (year, count) in by_year {
            writeln!(f, "- {year}: {count}")?;
        }
    }
    Ok(())
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.1}")
    } else {
        format!("{value:.1}")
    }
}

impl fmt::Display for GardenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Garden Overview")?;
        writeln!(f)?;
        writeln!(f, "- Total plants: {}", self.total_plants)?;
        writeln!(f)?;
        write_breakdown(
            f,
            &self.plants_by_status,
            &self.plants_by_season,
            &self.plants_by_year,
        )
    }
}

impl fmt::Display for BedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.bed_id, self.bed_name)?;
        writeln!(f)?;
        if let Some(year) = self.year {
            writeln!(f, "- Year: {year}")?;
        }
        writeln!(f, "- Total plants: {}", self.total_plants)?;
        let bed_space = self
            .total_bed_space
            .map(|s| format!("{s} sq ft"))
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(
            f,
            "- Space: {} sq ft used of {bed_space} ({})",
            self.total_space_used, self.space_utilization
        )?;
        writeln!(f)?;
        write_breakdown(
            f,
            &self.plants_by_status,
            &self.plants_by_season,
            &self.plants_by_year,
        )
    }
}

impl fmt::Display for DashboardMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dashboard {}", self.year)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Total plants: {} ({}% vs {})",
            self.total_plants,
            signed(self.total_plants_trend),
            self.year - 1
        )?;
        writeln!(
            f,
            "- Active plants: {} ({:.1}%)",
            self.active_plants, self.active_percentage
        )?;
        writeln!(
            f,
            "- Harvests: {} ({}% vs {})",
            self.harvest_count,
            signed(self.harvest_trend),
            self.year - 1
        )?;
        writeln!(
            f,
            "- Space utilization: {:.1}% ({} pts vs {})",
            self.space_utilization,
            signed(self.space_utilization_trend),
            self.year - 1
        )
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;

        for series in &self.series {
            writeln!(f)?;
            writeln!(f, "## {}", series.name)?;
            writeln!(f)?;
            writeln!(f, "| {} | {} |", self.x_label, self.y_label)?;
            writeln!(f, "|:-|-:|")?;
            for (x, y) in series.x.iter().zip(&series.y) {
                writeln!(f, "| {x} | {y:.2} |")?;
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a success-rate ranking.
pub struct Ranking(pub Vec<SuccessRate>);

impl fmt::Display for Ranking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Success Rate")?;
        writeln!(f)?;
        if self.0.is_empty() {
            return writeln!(f, "No plant has been grown in large enough numbers to rank.");
        }

        writeln!(f, "| Plant | Successful | Total | Rate |")?;
        writeln!(f, "|:-|-:|-:|-:|")?;
        for row in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {:.1}% |",
                row.name, row.successful, row.total, row.rate
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying top producers.
pub struct Producers(pub Vec<ProducerTotal>);

impl fmt::Display for Producers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Top Producers")?;
        writeln!(f)?;
        writeln!(f, "| Plant | Harvests | Pounds |")?;
        writeln!(f, "|:-|-:|-:|")?;
        for row in &self.0 {
            writeln!(
                f,
                "| {} | {} | {:.2} |",
                row.name, row.harvest_count, row.total_pounds
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying selectable years.
pub struct Years(pub Vec<i32>);

impl fmt::Display for Years {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for year in &self.0 {
            writeln!(f, "- {year}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartSeries;

    #[test]
    fn test_stats_list_every_status() {
        let output = GardenStats::default().to_string();
        assert!(output.contains("- Total plants: 0"));
        assert!(output.contains("○ Planted: 0"));
        assert!(output.contains("✓ Finished: 0"));
        assert!(output.contains("- WINTER: 0"));
    }

    #[test]
    fn test_dashboard_signs_trends() {
        let metrics = DashboardMetrics {
            year: 2025,
            total_plants: 10,
            total_plants_trend: 25.0,
            active_plants: 4,
            active_percentage: 40.0,
            harvest_count: 2,
            harvest_trend: -50.0,
            space_utilization: 12.5,
            space_utilization_trend: 0.0,
        };
        let output = metrics.to_string();
        assert!(output.contains("- Total plants: 10 (+25.0% vs 2024)"));
        assert!(output.contains("- Harvests: 2 (-50.0% vs 2024)"));
        assert!(output.contains("(0.0 pts vs 2024)"));
    }

    #[test]
    fn test_chart_table() {
        let chart = Chart {
            title: "Harvest Timeline 2025".to_string(),
            x_label: "Month".to_string(),
            y_label: "Pounds".to_string(),
            series: vec![ChartSeries {
                name: "Tomato".to_string(),
                x: vec!["2025-07".to_string()],
                y: vec![1.5],
            }],
        };
        let output = chart.to_string();
        assert!(output.contains("## Tomato"));
        assert!(output.contains("| 2025-07 | 1.50 |"));
    }
}
