//! Consistent read of the whole entity set for aggregation.

use super::{bed_queries::select_beds, harvest_queries::select_all_harvests, plant_queries::select_plants};
use crate::{
    error::{DatabaseResultExt, Result},
    models::PlantFilter,
    stats::GardenSnapshot,
};

impl super::Database {
    /// Loads beds, plants and harvests inside one read transaction so the
    /// three collections reflect the same committed state.
    pub fn load_snapshot(&mut self) -> Result<GardenSnapshot> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let beds = select_beds(&tx)?;
        let plants = select_plants(&tx, &PlantFilter::default())?;
        let harvests = select_all_harvests(&tx)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(GardenSnapshot {
            beds,
            plants,
            harvests,
        })
    }
}
