mod common;

use std::thread;

use common::{create_test_db, seed_bed, seed_plant};
use garden_core::{
    params::{AddHarvest, AddPlantImage, UpdateBed, UpdatePlant},
    validation::current_year,
    BarcodeType, Database, GardenError, HarvestUnit, PlantFilter, PlantStatus, SeedPacket,
};
use jiff::civil::date;
use rusqlite::Connection;
use tempfile::NamedTempFile;

fn harvest(plant_id: u64, quantity: f64) -> AddHarvest {
    AddHarvest {
        plant_id,
        harvest_date: date(2025, 7, 4),
        quantity,
        unit: HarvestUnit::Lbs,
        notes: None,
    }
}

#[test]
fn test_database_initialization_is_idempotent() {
    let (temp_file, mut db) = create_test_db();
    seed_bed(&mut db, "North Bed", "4x8");
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_beds().unwrap().len(), 1);
}

#[test]
fn test_get_bed_loads_plants_in_order() {
    let (_temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let other = seed_bed(&mut db, "South Bed", "2x2");
    seed_plant(&mut db, &bed, "Tomato", PlantStatus::Planted);
    seed_plant(&mut db, &other, "Kale", PlantStatus::Planted);
    seed_plant(&mut db, &bed, "Basil", PlantStatus::Planted);

    let loaded = db.get_bed(bed.id).unwrap().expect("Bed should exist");
    let names: Vec<&str> = loaded.plants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Tomato", "Basil"]);

    // Listings do not carry plants
    assert!(db.list_beds().unwrap().iter().all(|b| b.plants.is_empty()));
}

#[test]
fn test_update_bed_validates_dimensions() {
    let (_temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");

    let err = db
        .update_bed(&UpdateBed {
            id: bed.id,
            name: "North Bed".to_string(),
            dimensions: "4 by 8".to_string(),
            notes: None,
        })
        .unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { .. }));
    assert_eq!(db.get_bed(bed.id).unwrap().unwrap().dimensions, "4x8");
}

#[test]
fn test_seed_packet_and_images_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let plant = seed_plant(&mut db, &bed, "Tomato", PlantStatus::Planted);

    let packet = SeedPacket {
        code: "0123456789012".to_string(),
        barcode_type: BarcodeType::Ean13,
        product_name: Some("Heirloom Tomato".to_string()),
        manufacturer: None,
    };
    db.update_plant(&UpdatePlant {
        id: plant.id,
        seed_packet: Some(packet.clone()),
        ..Default::default()
    })
    .expect("Failed to attach seed packet");

    db.add_plant_image(&AddPlantImage {
        plant_id: plant.id,
        url: "https://example.com/first.jpg".to_string(),
        description: Some("First true leaves".to_string()),
    })
    .expect("Failed to add image");

    let loaded = db.get_plant(plant.id).unwrap().expect("Plant should exist");
    assert_eq!(loaded.seed_packet, Some(packet));
    assert_eq!(loaded.images.len(), 1);
    assert_eq!(loaded.images[0].url, "https://example.com/first.jpg");

    let err = db
        .add_plant_image(&AddPlantImage {
            plant_id: plant.id,
            url: "file:///tmp/x.jpg".to_string(),
            description: None,
        })
        .unwrap_err();
    assert!(matches!(err, GardenError::InvalidInput { ref field, .. } if field == "url"));
}

#[test]
fn test_failed_harvest_insert_leaves_status_unchanged() {
    let (temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let plant = seed_plant(&mut db, &bed, "Tomato", PlantStatus::Flowering);

    // Make every harvest insert fail after the status update has run
    let conn = Connection::open(temp_file.path()).expect("Failed to open side connection");
    conn.execute_batch(
        "CREATE TRIGGER fail_harvest BEFORE INSERT ON harvests \
         BEGIN SELECT RAISE(ABORT, 'harvest insert rejected'); END;",
    )
    .expect("Failed to create trigger");

    let err = db.record_harvest(&harvest(plant.id, 1.0)).unwrap_err();
    assert!(matches!(err, GardenError::Database { .. }), "{err:?}");

    let plant = db.get_plant(plant.id).unwrap().unwrap();
    assert_eq!(plant.status, PlantStatus::Flowering);
    assert!(db.list_harvests(plant.id).unwrap().is_empty());
}

#[test]
fn test_list_harvests_for_missing_plant() {
    let (_temp_file, db) = create_test_db();
    let err = db.list_harvests(77).unwrap_err();
    assert!(matches!(err, GardenError::PlantNotFound { id: 77 }));
}

#[test]
fn test_delete_harvest_missing_plant_and_harvest() {
    let (_temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let plant = seed_plant(&mut db, &bed, "Tomato", PlantStatus::Harvesting);

    assert!(matches!(
        db.delete_harvest(99, 1).unwrap_err(),
        GardenError::PlantNotFound { id: 99 }
    ));
    assert!(matches!(
        db.delete_harvest(plant.id, 1).unwrap_err(),
        GardenError::HarvestNotFound { id: 1, .. }
    ));
}

#[test]
fn test_delete_bed_removes_every_dependent_row() {
    let (temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let plant = seed_plant(&mut db, &bed, "Tomato", PlantStatus::Flowering);
    db.record_harvest(&harvest(plant.id, 2.0)).unwrap();
    db.add_plant_image(&AddPlantImage {
        plant_id: plant.id,
        url: "https://example.com/t.jpg".to_string(),
        description: None,
    })
    .unwrap();

    db.delete_bed(bed.id).expect("Failed to delete bed");

    let conn = Connection::open(temp_file.path()).unwrap();
    for table in ["garden_beds", "plants", "harvests", "plant_images"] {
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0, "{table} should be empty");
    }

    assert!(matches!(
        db.delete_bed(bed.id).unwrap_err(),
        GardenError::BedNotFound { .. }
    ));
}

#[test]
fn test_concurrent_transitions_admit_one_winner() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let plant_id = {
        let mut db = Database::new(temp_file.path()).unwrap();
        let bed = seed_bed(&mut db, "North Bed", "4x8");
        seed_plant(&mut db, &bed, "Tomato", PlantStatus::Planted).id
    };

    let path = temp_file.path();
    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || {
                    let mut db = Database::new(path)?;
                    db.transition_plant_status(plant_id, PlantStatus::Sprouted)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Transition thread panicked"))
            .collect()
    });

    let winners = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results.iter().filter(|r| r.is_err()) {
        match result {
            Err(GardenError::InvalidTransition { current, .. }) => {
                assert_eq!(*current, PlantStatus::Sprouted);
            }
            other => panic!("expected InvalidTransition, got {other:?}"),
        }
    }
}

#[test]
fn test_list_plants_filter_by_bed() {
    let (_temp_file, mut db) = create_test_db();
    let bed = seed_bed(&mut db, "North Bed", "4x8");
    let other = seed_bed(&mut db, "South Bed", "4x8");
    seed_plant(&mut db, &bed, "Tomato", PlantStatus::Planted);
    seed_plant(&mut db, &other, "Kale", PlantStatus::Planted);

    let plants = db.list_plants(Some(&PlantFilter::for_bed(other.id))).unwrap();
    assert_eq!(plants.len(), 1);
    assert_eq!(plants[0].name, "Kale");
    assert_eq!(db.list_plants(None).unwrap().len(), 2);
}

#[test]
fn test_migrates_plants_table_without_newer_columns() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE garden_beds (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 name TEXT NOT NULL,
                 dimensions TEXT NOT NULL,
                 notes TEXT,
                 created_at TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );
             CREATE TABLE plants (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 bed_id INTEGER NOT NULL REFERENCES garden_beds(id),
                 name TEXT NOT NULL,
                 variety TEXT,
                 planting_date TEXT NOT NULL,
                 status TEXT NOT NULL,
                 expected_harvest_date TEXT,
                 notes TEXT,
                 created_at TEXT NOT NULL,
                 updated_at TEXT NOT NULL
             );
             INSERT INTO garden_beds (name, dimensions, created_at, updated_at)
                 VALUES ('Old Bed', '4x8', '2023-03-01T00:00:00Z', '2023-03-01T00:00:00Z');
             INSERT INTO plants (bed_id, name, planting_date, status, created_at, updated_at)
                 VALUES (1, 'Garlic', '2023-10-15', 'SPROUTED', '2023-10-15T00:00:00Z', '2023-10-15T00:00:00Z');",
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("Failed to migrate database");
    let plant = db.get_plant(1).unwrap().expect("Plant should survive migration");
    assert_eq!(plant.name, "Garlic");
    assert_eq!(plant.status, PlantStatus::Sprouted);
    assert_eq!(plant.quantity, 1);
    assert_eq!(plant.space_required, 4);
    assert_eq!(plant.year, current_year());
    assert_eq!(plant.season, None);
}
