//! Garden bed operations.

use super::Garden;
use crate::{
    error::{GardenError, Result},
    models::GardenBed,
    params::{CreateBed, Id, UpdateBed},
};

impl Garden {
    /// Creates a bed after validating its `LxW` dimensions.
    pub async fn create_bed(&self, params: &CreateBed) -> Result<GardenBed> {
        let params = params.clone();
        self.with_database(move |db| db.create_bed(&params)).await
    }

    /// Lists all beds ordered by ID, without their plants.
    pub async fn list_beds(&self) -> Result<Vec<GardenBed>> {
        self.with_database(|db| db.list_beds()).await
    }

    /// Retrieves a bed with its plants.
    pub async fn get_bed(&self, params: &Id) -> Result<GardenBed> {
        let id = params.id;
        self.with_database(move |db| db.get_bed(id)?.ok_or(GardenError::BedNotFound { id }))
            .await
    }

    /// Replaces a bed's name, dimensions and notes.
    pub async fn update_bed(&self, params: &UpdateBed) -> Result<GardenBed> {
        let params = params.clone();
        self.with_database(move |db| db.update_bed(&params)).await
    }

    /// Deletes a bed with all of its plants, harvests and images. Returns
    /// the bed and the plants it held.
    pub async fn delete_bed(&self, params: &Id) -> Result<GardenBed> {
        let id = params.id;
        self.with_database(move |db| db.delete_bed(id)).await
    }
}
