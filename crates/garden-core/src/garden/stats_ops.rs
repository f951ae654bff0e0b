//! Statistics operations. Each call reads a fresh snapshot.

use jiff::Zoned;

use super::Garden;
use crate::{
    error::Result,
    models::{BedStats, Chart, DashboardMetrics, GardenStats, ProducerTotal, SuccessRate},
    params::{BedStatsQuery, YearQuery},
    stats::{self, GardenSnapshot},
    validation::current_year,
};

impl Garden {
    /// Loads every bed, plant and harvest in one read transaction.
    pub async fn snapshot(&self) -> Result<GardenSnapshot> {
        self.with_database(|db| db.load_snapshot()).await
    }

    /// Garden-wide plant counts.
    pub async fn overall_stats(&self) -> Result<GardenStats> {
        Ok(stats::overall_stats(&self.snapshot().await?))
    }

    /// Counts and space utilization for one bed.
    pub async fn bed_stats(&self, params: &BedStatsQuery) -> Result<BedStats> {
        stats::bed_stats(&self.snapshot().await?, params.bed_id, params.year)
    }

    /// Years worth offering as filters, newest first.
    pub async fn available_years(&self) -> Result<Vec<i32>> {
        Ok(stats::available_years(
            &self.snapshot().await?,
            current_year(),
        ))
    }

    /// Dashboard for the requested year (default: current year).
    pub async fn dashboard_metrics(&self, params: &YearQuery) -> Result<DashboardMetrics> {
        let year = params.year.unwrap_or_else(current_year);
        Ok(stats::dashboard_metrics(&self.snapshot().await?, year))
    }

    /// Pounds harvested per month and plant name (default: current year).
    pub async fn harvest_timeline(&self, params: &YearQuery) -> Result<Chart> {
        let today = Zoned::now().date();
        let year = params.year.unwrap_or_else(|| i32::from(today.year()));
        Ok(stats::harvest_timeline(
            &self.snapshot().await?,
            year,
            today,
        ))
    }

    /// Success rate per plant name; all years unless one is given.
    pub async fn success_rate_ranking(&self, params: &YearQuery) -> Result<Vec<SuccessRate>> {
        Ok(stats::success_rate_ranking(
            &self.snapshot().await?,
            params.year,
        ))
    }

    /// Pounds harvested per plant name (default: current year).
    pub async fn top_producers(&self, params: &YearQuery) -> Result<Vec<ProducerTotal>> {
        let year = params.year.unwrap_or_else(current_year);
        Ok(stats::top_producers(&self.snapshot().await?, year))
    }

    /// Plant quantity per tracking year.
    pub async fn plants_by_year_chart(&self) -> Result<Chart> {
        Ok(stats::plants_by_year_chart(
            &self.snapshot().await?,
            current_year(),
        ))
    }
}
