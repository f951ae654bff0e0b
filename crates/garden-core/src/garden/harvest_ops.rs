//! Harvest operations.

use super::Garden;
use crate::{
    error::Result,
    models::Harvest,
    params::{AddHarvest, HarvestRef, Id},
};

impl Garden {
    /// Records a harvest. A FLOWERING plant moves to HARVESTING in the same
    /// transaction.
    pub async fn record_harvest(&self, params: &AddHarvest) -> Result<Harvest> {
        let params = params.clone();
        self.with_database(move |db| db.record_harvest(&params))
            .await
    }

    /// Lists the harvests of the plant `params.id` in insertion order.
    pub async fn list_harvests(&self, params: &Id) -> Result<Vec<Harvest>> {
        let plant_id = params.id;
        self.with_database(move |db| db.list_harvests(plant_id))
            .await
    }

    /// Deletes a harvest that belongs to the given plant.
    pub async fn delete_harvest(&self, params: &HarvestRef) -> Result<Harvest> {
        let HarvestRef {
            plant_id,
            harvest_id,
        } = *params;
        self.with_database(move |db| db.delete_harvest(plant_id, harvest_id))
            .await
    }
}
