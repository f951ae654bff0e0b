//! Plant operations, including lifecycle transitions.

use super::Garden;
use crate::{
    error::{GardenError, Result},
    lifecycle,
    models::{Plant, PlantFilter, PlantImage},
    params::{AddPlantImage, CreatePlant, Id, ListPlants, TransitionStatus, UpdatePlant},
};

impl Garden {
    /// Creates a plant in the bed referenced by `params.location`.
    pub async fn create_plant(&self, params: &CreatePlant) -> Result<Plant> {
        let params = params.clone();
        self.with_database(move |db| db.create_plant(&params)).await
    }

    /// Lists plants matching the populated filters, ordered by ID.
    pub async fn list_plants(&self, params: &ListPlants) -> Result<Vec<Plant>> {
        let filter = PlantFilter::from(params);
        self.with_database(move |db| db.list_plants(Some(&filter)))
            .await
    }

    /// Retrieves a plant with its images.
    pub async fn get_plant(&self, params: &Id) -> Result<Plant> {
        let id = params.id;
        self.with_database(move |db| db.get_plant(id)?.ok_or(GardenError::PlantNotFound { id }))
            .await
    }

    /// Updates a plant's descriptive fields. Status is never changed here.
    pub async fn update_plant(&self, params: &UpdatePlant) -> Result<Plant> {
        let params = params.clone();
        self.with_database(move |db| db.update_plant(&params)).await
    }

    /// Moves a plant to the requested status, which must be the single
    /// legal successor of its current status.
    pub async fn transition_plant_status(&self, params: &TransitionStatus) -> Result<Plant> {
        let TransitionStatus { id, status } = *params;
        self.with_database(move |db| db.transition_plant_status(id, status))
            .await
    }

    /// Moves a plant to whatever status follows its current one.
    pub async fn advance_plant(&self, params: &Id) -> Result<Plant> {
        let id = params.id;
        self.with_database(move |db| {
            let plant = db.get_plant(id)?.ok_or(GardenError::PlantNotFound { id })?;
            let next = lifecycle::next_status(plant.status).ok_or_else(|| {
                GardenError::InvalidState {
                    message: format!(
                        "Plant {id} is {} and has no further status",
                        plant.status
                    ),
                }
            })?;
            db.transition_plant_status(id, next)
        })
        .await
    }

    /// Deletes a plant with its harvests and images. Returns the plant as it
    /// was before deletion.
    pub async fn delete_plant(&self, params: &Id) -> Result<Plant> {
        let id = params.id;
        self.with_database(move |db| db.delete_plant(id)).await
    }

    /// Attaches photo metadata to a plant.
    pub async fn add_plant_image(&self, params: &AddPlantImage) -> Result<PlantImage> {
        let params = params.clone();
        self.with_database(move |db| db.add_plant_image(&params))
            .await
    }
}
