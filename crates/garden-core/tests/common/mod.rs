#![allow(dead_code)]

use garden_core::{
    params::{CreateBed, CreatePlant},
    Database, GardenBed, GardenBuilder, Plant, PlantStatus,
};
use jiff::civil::date;
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary database for testing
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Helper function to create a test garden
pub async fn create_test_garden() -> (TempDir, garden_core::Garden) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let garden = GardenBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create garden");
    (temp_dir, garden)
}

pub fn seed_bed(db: &mut Database, name: &str, dimensions: &str) -> GardenBed {
    db.create_bed(&CreateBed {
        name: name.to_string(),
        dimensions: dimensions.to_string(),
        notes: None,
    })
    .expect("Failed to create bed")
}

pub fn seed_plant(db: &mut Database, bed: &GardenBed, name: &str, status: PlantStatus) -> Plant {
    let mut params = CreatePlant::new(name, date(2025, 5, 1), bed.location());
    params.status = Some(status);
    db.create_plant(&params).expect("Failed to create plant")
}
