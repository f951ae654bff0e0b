//! Garden bed CRUD operations.

use jiff::Timestamp;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use super::{
    parse_column,
    plant_queries::{attach_images, delete_plant_rows, select_plants},
};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{GardenBed, PlantFilter},
    params::{CreateBed, UpdateBed},
    validation,
};

const BED_COLUMNS: &str = "id, name, dimensions, notes, created_at, updated_at";
const INSERT_BED_SQL: &str = "INSERT INTO garden_beds (name, dimensions, notes, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_BED_SQL: &str =
    "UPDATE garden_beds SET name = ?1, dimensions = ?2, notes = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_BED_SQL: &str = "DELETE FROM garden_beds WHERE id = ?1";

fn build_bed_from_row(row: &Row) -> rusqlite::Result<GardenBed> {
    Ok(GardenBed {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        dimensions: row.get(2)?,
        notes: row.get(3)?,
        created_at: parse_column(row, 4)?,
        updated_at: parse_column(row, 5)?,
        plants: Vec::new(),
    })
}

/// Selects every bed, ordered by ID, without plants.
pub(crate) fn select_beds(conn: &Connection) -> Result<Vec<GardenBed>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {BED_COLUMNS} FROM garden_beds ORDER BY id"))
        .db_context("Failed to prepare bed query")?;

    let beds = stmt
        .query_map([], build_bed_from_row)
        .db_context("Failed to query beds")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch beds")?;
    Ok(beds)
}

/// Loads one bed with its plants (and their images).
fn select_bed(conn: &Connection, id: u64) -> Result<Option<GardenBed>> {
    let bed = conn
        .query_row(
            &format!("SELECT {BED_COLUMNS} FROM garden_beds WHERE id = ?1"),
            params![id as i64],
            build_bed_from_row,
        )
        .optional()
        .db_context("Failed to query bed")?;

    match bed {
        Some(mut bed) => {
            let mut plants = select_plants(conn, &PlantFilter::for_bed(id))?;
            attach_images(conn, &mut plants)?;
            bed.plants = plants;
            Ok(Some(bed))
        }
        None => Ok(None),
    }
}

impl super::Database {
    /// Creates a new garden bed.
    pub fn create_bed(&mut self, params: &CreateBed) -> Result<GardenBed> {
        validation::validate_name("name", &params.name)?;
        validation::parse_dimensions(&params.dimensions)?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_BED_SQL,
                params![
                    &params.name,
                    params.dimensions.trim(),
                    params.notes.as_deref(),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert garden bed")?;

        let id = self.connection.last_insert_rowid() as u64;
        debug!("Created bed {id} '{}'", params.name);

        Ok(GardenBed {
            id,
            name: params.name.clone(),
            dimensions: params.dimensions.trim().to_string(),
            notes: params.notes.clone(),
            created_at: now,
            updated_at: now,
            plants: Vec::new(),
        })
    }

    /// Lists all beds ordered by ID. Plants are not loaded.
    pub fn list_beds(&self) -> Result<Vec<GardenBed>> {
        select_beds(&self.connection)
    }

    /// Retrieves a bed with its plants.
    pub fn get_bed(&self, id: u64) -> Result<Option<GardenBed>> {
        select_bed(&self.connection, id)
    }

    /// Replaces a bed's name, dimensions and notes.
    pub fn update_bed(&mut self, params: &UpdateBed) -> Result<GardenBed> {
        validation::validate_name("name", &params.name)?;
        validation::parse_dimensions(&params.dimensions)?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let changed = tx
            .execute(
                UPDATE_BED_SQL,
                params![
                    &params.name,
                    params.dimensions.trim(),
                    params.notes.as_deref(),
                    now.to_string(),
                    params.id as i64
                ],
            )
            .db_context("Failed to update garden bed")?;

        if changed == 0 {
            return Err(GardenError::BedNotFound { id: params.id });
        }

        let bed = select_bed(&tx, params.id)?.ok_or(GardenError::BedNotFound { id: params.id })?;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated bed {}", params.id);

        Ok(bed)
    }

    /// Permanently deletes a bed together with its plants and everything
    /// recorded against them. Returns the bed as it was before deletion.
    pub fn delete_bed(&mut self, id: u64) -> Result<GardenBed> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let bed = select_bed(&tx, id)?.ok_or(GardenError::BedNotFound { id })?;

        for plant in &bed.plants {
            delete_plant_rows(&tx, plant.id)?;
        }
        tx.execute(DELETE_BED_SQL, params![id as i64])
            .db_context("Failed to delete garden bed")?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Deleted bed {id} and {} plant record(s)", bed.plants.len());

        Ok(bed)
    }
}
