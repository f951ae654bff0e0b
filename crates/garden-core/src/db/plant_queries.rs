//! Plant CRUD operations, lifecycle transitions and image metadata.

use jiff::{civil::Date, Timestamp};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

use super::{parse_column, parse_optional_column};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    lifecycle,
    models::{Plant, PlantFilter, PlantImage, PlantStatus, SeedPacket, DEFAULT_SPACE_REQUIRED},
    params::{AddPlantImage, CreatePlant, UpdatePlant},
    validation::{self, current_year},
};

const PLANT_COLUMNS: &str = "id, bed_id, name, variety, planting_date, status, season, year, quantity, space_required, expected_harvest_date, notes, barcode_code, barcode_type, barcode_product_name, barcode_manufacturer, created_at, updated_at";
const CHECK_BED_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM garden_beds WHERE id = ?1)";
const INSERT_PLANT_SQL: &str = "INSERT INTO plants (bed_id, name, variety, planting_date, status, season, year, quantity, space_required, expected_harvest_date, notes, barcode_code, barcode_type, barcode_product_name, barcode_manufacturer, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)";
const UPDATE_PLANT_SQL: &str = "UPDATE plants SET name = ?1, variety = ?2, planting_date = ?3, season = ?4, year = ?5, quantity = ?6, space_required = ?7, expected_harvest_date = ?8, notes = ?9, barcode_code = ?10, barcode_type = ?11, barcode_product_name = ?12, barcode_manufacturer = ?13, updated_at = ?14 WHERE id = ?15";
const SELECT_PLANT_STATUS_SQL: &str = "SELECT status FROM plants WHERE id = ?1";
const UPDATE_PLANT_STATUS_CLAIMED_SQL: &str =
    "UPDATE plants SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4";
const DELETE_PLANT_HARVESTS_SQL: &str = "DELETE FROM harvests WHERE plant_id = ?1";
const DELETE_PLANT_IMAGES_SQL: &str = "DELETE FROM plant_images WHERE plant_id = ?1";
const DELETE_PLANT_SQL: &str = "DELETE FROM plants WHERE id = ?1";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plants WHERE id = ?1)";
const INSERT_IMAGE_SQL: &str =
    "INSERT INTO plant_images (plant_id, url, description, taken_at) VALUES (?1, ?2, ?3, ?4)";
const SELECT_IMAGES_SQL: &str = "SELECT id, plant_id, url, description, taken_at FROM plant_images WHERE plant_id = ?1 ORDER BY id";

/// Constructs a Plant from a row selected with `PLANT_COLUMNS`.
fn build_plant_from_row(row: &Row) -> rusqlite::Result<Plant> {
    let barcode_code: Option<String> = row.get(12)?;
    let barcode_type = parse_optional_column(row, 13)?;
    let seed_packet = match (barcode_code, barcode_type) {
        (Some(code), Some(barcode_type)) => Some(SeedPacket {
            code,
            barcode_type,
            product_name: row.get(14)?,
            manufacturer: row.get(15)?,
        }),
        _ => None,
    };

    Ok(Plant {
        id: row.get::<_, i64>(0)? as u64,
        bed_id: row.get::<_, i64>(1)? as u64,
        name: row.get(2)?,
        variety: row.get(3)?,
        planting_date: parse_column(row, 4)?,
        status: parse_column(row, 5)?,
        season: parse_optional_column(row, 6)?,
        year: row.get(7)?,
        quantity: row.get::<_, i64>(8)? as u32,
        space_required: row.get::<_, i64>(9)? as u32,
        expected_harvest_date: parse_optional_column(row, 10)?,
        notes: row.get(11)?,
        seed_packet,
        images: Vec::new(),
        created_at: parse_column(row, 16)?,
        updated_at: parse_column(row, 17)?,
    })
}

fn build_image_from_row(row: &Row) -> rusqlite::Result<PlantImage> {
    Ok(PlantImage {
        id: row.get::<_, i64>(0)? as u64,
        plant_id: row.get::<_, i64>(1)? as u64,
        url: row.get(2)?,
        description: row.get(3)?,
        taken_at: parse_column(row, 4)?,
    })
}

/// Selects plants matching `filter`, ordered by ID, without their images.
pub(crate) fn select_plants(conn: &Connection, filter: &PlantFilter) -> Result<Vec<Plant>> {
    let mut query = format!("SELECT {PLANT_COLUMNS} FROM plants");

    let mut conditions = Vec::new();
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    if let Some(year) = filter.year {
        conditions.push("year = ?");
        params_vec.push(Box::new(year));
    }
    if let Some(season) = filter.season {
        conditions.push("season = ?");
        params_vec.push(Box::new(season.as_str()));
    }
    if let Some(status) = filter.status {
        conditions.push("status = ?");
        params_vec.push(Box::new(status.as_str()));
    }
    if let Some(bed_id) = filter.bed_id {
        conditions.push("bed_id = ?");
        params_vec.push(Box::new(bed_id as i64));
    }

    if !conditions.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&conditions.join(" AND "));
    }
    query.push_str(" ORDER BY id");

    let mut stmt = conn
        .prepare(&query)
        .db_context("Failed to prepare plant query")?;
    let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

    let plants = stmt
        .query_map(&params_refs[..], build_plant_from_row)
        .db_context("Failed to query plants")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch plants")?;
    Ok(plants)
}

/// Loads the image metadata of every plant in `plants`.
pub(crate) fn attach_images(conn: &Connection, plants: &mut [Plant]) -> Result<()> {
    let mut stmt = conn
        .prepare(SELECT_IMAGES_SQL)
        .db_context("Failed to prepare image query")?;
    for plant in plants.iter_mut() {
        plant.images = stmt
            .query_map(params![plant.id as i64], build_image_from_row)
            .db_context("Failed to query plant images")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plant images")?;
    }
    Ok(())
}

/// Loads one plant with its images.
pub(crate) fn select_plant(conn: &Connection, id: u64) -> Result<Option<Plant>> {
    let plant = conn
        .query_row(
            &format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"),
            params![id as i64],
            build_plant_from_row,
        )
        .optional()
        .db_context("Failed to query plant")?;

    match plant {
        Some(plant) => {
            let mut plants = [plant];
            attach_images(conn, &mut plants)?;
            let [plant] = plants;
            Ok(Some(plant))
        }
        None => Ok(None),
    }
}

/// Reads the current status of a plant, failing when it does not exist.
pub(crate) fn select_plant_status(conn: &Connection, id: u64) -> Result<PlantStatus> {
    let status: Option<String> = conn
        .query_row(SELECT_PLANT_STATUS_SQL, params![id as i64], |row| row.get(0))
        .optional()
        .db_context("Failed to query plant status")?;

    let status = status.ok_or(GardenError::PlantNotFound { id })?;
    status.parse::<PlantStatus>().map_err(|reason| {
        GardenError::database("Stored plant status is invalid").with_source(
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, reason.into()),
        )
    })
}

/// Validates `from -> to` and moves the plant with a compare-and-set update.
///
/// The update only applies when the stored status still equals `from`; when
/// another writer got there first the fresh status is reported as an
/// invalid transition.
pub(crate) fn apply_transition(
    tx: &Transaction,
    id: u64,
    from: PlantStatus,
    to: PlantStatus,
    now: Timestamp,
) -> Result<()> {
    lifecycle::check_transition(from, to)?;

    let changed = tx
        .execute(
            UPDATE_PLANT_STATUS_CLAIMED_SQL,
            params![to.as_str(), now.to_string(), id as i64, from.as_str()],
        )
        .db_context("Failed to update plant status")?;

    if changed == 0 {
        let current = select_plant_status(tx, id)?;
        return Err(GardenError::InvalidTransition {
            current,
            requested: to,
            allowed: lifecycle::allowed_transitions(current).to_vec(),
        });
    }

    info!("Plant {id} moved from {from} to {to}");
    Ok(())
}

pub(crate) fn plant_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check plant existence")
}

/// Removes a plant together with its harvests and images.
pub(crate) fn delete_plant_rows(tx: &Transaction, id: u64) -> Result<()> {
    tx.execute(DELETE_PLANT_HARVESTS_SQL, params![id as i64])
        .db_context("Failed to delete plant harvests")?;
    tx.execute(DELETE_PLANT_IMAGES_SQL, params![id as i64])
        .db_context("Failed to delete plant images")?;
    tx.execute(DELETE_PLANT_SQL, params![id as i64])
        .db_context("Failed to delete plant")?;
    Ok(())
}

fn date_to_sql(date: Option<Date>) -> Option<String> {
    date.map(|d| d.to_string())
}

impl super::Database {
    /// Creates a plant in the bed named by `params.location`.
    pub fn create_plant(&mut self, params: &CreatePlant) -> Result<Plant> {
        validation::validate_name("name", &params.name)?;
        let bed_id = validation::parse_location(&params.location)?;
        let quantity = validation::validate_quantity(params.quantity.unwrap_or(1))?;
        let space_required = validation::validate_space_required(
            params
                .space_required
                .unwrap_or(i64::from(DEFAULT_SPACE_REQUIRED)),
        )?;
        let this_year = current_year();
        let year = validation::validate_year(params.year.unwrap_or(this_year), this_year)?;
        let status = params.status.unwrap_or_default();

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let bed_exists: bool = tx
            .query_row(CHECK_BED_EXISTS_SQL, params![bed_id as i64], |row| row.get(0))
            .db_context("Failed to check bed existence")?;
        if !bed_exists {
            return Err(GardenError::BedNotFound { id: bed_id });
        }

        let now = Timestamp::now();
        let now_str = now.to_string();
        let packet = params.seed_packet.as_ref();

        tx.execute(
            INSERT_PLANT_SQL,
            params![
                bed_id as i64,
                &params.name,
                params.variety.as_deref(),
                params.planting_date.to_string(),
                status.as_str(),
                params.season.map(|s| s.as_str()),
                year,
                i64::from(quantity),
                i64::from(space_required),
                date_to_sql(params.expected_harvest_date),
                params.notes.as_deref(),
                packet.map(|p| p.code.as_str()),
                packet.map(|p| p.barcode_type.as_str()),
                packet.and_then(|p| p.product_name.as_deref()),
                packet.and_then(|p| p.manufacturer.as_deref()),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert plant")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created plant {id} '{}' in bed {bed_id}", params.name);

        Ok(Plant {
            id,
            bed_id,
            name: params.name.clone(),
            variety: params.variety.clone(),
            planting_date: params.planting_date,
            status,
            season: params.season,
            year,
            quantity,
            space_required,
            expected_harvest_date: params.expected_harvest_date,
            notes: params.notes.clone(),
            seed_packet: params.seed_packet.clone(),
            images: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a plant with its images.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        select_plant(&self.connection, id)
    }

    /// Lists plants with optional filtering, ordered by ID, with images.
    pub fn list_plants(&self, filter: Option<&PlantFilter>) -> Result<Vec<Plant>> {
        let filter = filter.cloned().unwrap_or_default();
        let mut plants = select_plants(&self.connection, &filter)?;
        attach_images(&self.connection, &mut plants)?;
        Ok(plants)
    }

    /// Applies the populated fields of `params` to a plant. Status is not
    /// touched here.
    pub fn update_plant(&mut self, params: &UpdatePlant) -> Result<Plant> {
        if let Some(ref name) = params.name {
            validation::validate_name("name", name)?;
        }
        let quantity = params
            .quantity
            .map(validation::validate_quantity)
            .transpose()?;
        let space_required = params
            .space_required
            .map(validation::validate_space_required)
            .transpose()?;
        let year = params
            .year
            .map(|year| validation::validate_year(year, current_year()))
            .transpose()?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let mut plant =
            select_plant(&tx, params.id)?.ok_or(GardenError::PlantNotFound { id: params.id })?;

        if let Some(ref name) = params.name {
            plant.name = name.clone();
        }
        if let Some(ref variety) = params.variety {
            plant.variety = variety.clone();
        }
        if let Some(planting_date) = params.planting_date {
            plant.planting_date = planting_date;
        }
        if let Some(season) = params.season {
            plant.season = Some(season);
        }
        if let Some(year) = year {
            plant.year = year;
        }
        if let Some(quantity) = quantity {
            plant.quantity = quantity;
        }
        if let Some(space_required) = space_required {
            plant.space_required = space_required;
        }
        if let Some(expected) = params.expected_harvest_date {
            plant.expected_harvest_date = expected;
        }
        if let Some(ref notes) = params.notes {
            plant.notes = notes.clone();
        }
        if let Some(ref packet) = params.seed_packet {
            plant.seed_packet = Some(packet.clone());
        }

        let now = Timestamp::now();
        let packet = plant.seed_packet.as_ref();
        tx.execute(
            UPDATE_PLANT_SQL,
            params![
                &plant.name,
                plant.variety.as_deref(),
                plant.planting_date.to_string(),
                plant.season.map(|s| s.as_str()),
                plant.year,
                i64::from(plant.quantity),
                i64::from(plant.space_required),
                date_to_sql(plant.expected_harvest_date),
                plant.notes.as_deref(),
                packet.map(|p| p.code.as_str()),
                packet.map(|p| p.barcode_type.as_str()),
                packet.and_then(|p| p.product_name.as_deref()),
                packet.and_then(|p| p.manufacturer.as_deref()),
                now.to_string(),
                plant.id as i64
            ],
        )
        .db_context("Failed to update plant")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Updated plant {}", plant.id);

        plant.updated_at = now;
        Ok(plant)
    }

    /// Moves a plant to `status`, which must be the single legal successor
    /// of its current status.
    pub fn transition_plant_status(&mut self, id: u64, status: PlantStatus) -> Result<Plant> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let current = select_plant_status(&tx, id)?;
        apply_transition(&tx, id, current, status, Timestamp::now())?;

        let plant = select_plant(&tx, id)?.ok_or(GardenError::PlantNotFound { id })?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(plant)
    }

    /// Permanently deletes a plant along with its harvests and images.
    /// Returns the plant as it was before deletion.
    pub fn delete_plant(&mut self, id: u64) -> Result<Plant> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let plant = select_plant(&tx, id)?.ok_or(GardenError::PlantNotFound { id })?;
        delete_plant_rows(&tx, id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        info!("Deleted plant {id} with its harvests and images");

        Ok(plant)
    }

    /// Attaches photo metadata to a plant.
    pub fn add_plant_image(&mut self, params: &AddPlantImage) -> Result<PlantImage> {
        validation::validate_image_url(&params.url)?;

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if !plant_exists(&tx, params.plant_id)? {
            return Err(GardenError::PlantNotFound {
                id: params.plant_id,
            });
        }

        let taken_at = Timestamp::now();
        tx.execute(
            INSERT_IMAGE_SQL,
            params![
                params.plant_id as i64,
                &params.url,
                params.description.as_deref(),
                taken_at.to_string()
            ],
        )
        .db_context("Failed to insert plant image")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Attached image {id} to plant {}", params.plant_id);

        Ok(PlantImage {
            id,
            plant_id: params.plant_id,
            url: params.url.clone(),
            description: params.description.clone(),
            taken_at,
        })
    }
}
