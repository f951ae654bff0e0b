//! Harvest recording, listing and deletion.

use jiff::Timestamp;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

use super::{
    parse_column,
    plant_queries::{apply_transition, plant_exists, select_plant_status},
};
use crate::{
    error::{DatabaseResultExt, GardenError, Result},
    models::{Harvest, PlantStatus},
    params::AddHarvest,
    validation,
};

const HARVEST_COLUMNS: &str = "id, plant_id, harvest_date, quantity, unit, notes, created_at";
const INSERT_HARVEST_SQL: &str = "INSERT INTO harvests (plant_id, harvest_date, quantity, unit, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const DELETE_HARVEST_SQL: &str = "DELETE FROM harvests WHERE id = ?1 AND plant_id = ?2";

fn build_harvest_from_row(row: &Row) -> rusqlite::Result<Harvest> {
    Ok(Harvest {
        id: row.get::<_, i64>(0)? as u64,
        plant_id: row.get::<_, i64>(1)? as u64,
        harvest_date: parse_column(row, 2)?,
        quantity: row.get(3)?,
        unit: parse_column(row, 4)?,
        notes: row.get(5)?,
        created_at: parse_column(row, 6)?,
    })
}

/// Selects every harvest, ordered by ID.
pub(crate) fn select_all_harvests(conn: &Connection) -> Result<Vec<Harvest>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {HARVEST_COLUMNS} FROM harvests ORDER BY id"))
        .db_context("Failed to prepare harvest query")?;

    let harvests = stmt
        .query_map([], build_harvest_from_row)
        .db_context("Failed to query harvests")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch harvests")?;
    Ok(harvests)
}

impl super::Database {
    /// Records a harvest against a FLOWERING or HARVESTING plant.
    ///
    /// A FLOWERING plant is advanced to HARVESTING in the same transaction
    /// as the insert, so either both changes are stored or neither is.
    pub fn record_harvest(&mut self, params: &AddHarvest) -> Result<Harvest> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        let status = select_plant_status(&tx, params.plant_id)?;
        if !status.accepts_harvest() {
            return Err(GardenError::InvalidState {
                message: format!(
                    "Plant must be FLOWERING or HARVESTING to record a harvest (current status: {status})"
                ),
            });
        }
        let quantity = validation::validate_harvest_quantity(params.quantity)?;

        let now = Timestamp::now();
        if status == PlantStatus::Flowering {
            apply_transition(
                &tx,
                params.plant_id,
                PlantStatus::Flowering,
                PlantStatus::Harvesting,
                now,
            )?;
        }

        tx.execute(
            INSERT_HARVEST_SQL,
            params![
                params.plant_id as i64,
                params.harvest_date.to_string(),
                quantity,
                params.unit.as_str(),
                params.notes.as_deref(),
                now.to_string()
            ],
        )
        .db_context("Failed to insert harvest")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to commit transaction")?;
        debug!(
            "Recorded harvest {id} for plant {}: {quantity} {}",
            params.plant_id,
            params.unit.as_str()
        );

        Ok(Harvest {
            id,
            plant_id: params.plant_id,
            harvest_date: params.harvest_date,
            quantity,
            unit: params.unit,
            notes: params.notes.clone(),
            created_at: now,
        })
    }

    /// Lists a plant's harvests in insertion order.
    pub fn list_harvests(&self, plant_id: u64) -> Result<Vec<Harvest>> {
        if !plant_exists(&self.connection, plant_id)? {
            return Err(GardenError::PlantNotFound { id: plant_id });
        }

        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {HARVEST_COLUMNS} FROM harvests WHERE plant_id = ?1 ORDER BY id"
            ))
            .db_context("Failed to prepare harvest query")?;

        let harvests = stmt
            .query_map(params![plant_id as i64], build_harvest_from_row)
            .db_context("Failed to query harvests")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch harvests")?;
        Ok(harvests)
    }

    /// Deletes a harvest, provided it was recorded against `plant_id`.
    /// Returns the harvest as it was before deletion.
    pub fn delete_harvest(&mut self, plant_id: u64, harvest_id: u64) -> Result<Harvest> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;

        if !plant_exists(&tx, plant_id)? {
            return Err(GardenError::PlantNotFound { id: plant_id });
        }

        let harvest = tx
            .query_row(
                &format!("SELECT {HARVEST_COLUMNS} FROM harvests WHERE id = ?1 AND plant_id = ?2"),
                params![harvest_id as i64, plant_id as i64],
                build_harvest_from_row,
            )
            .optional()
            .db_context("Failed to query harvest")?
            .ok_or(GardenError::HarvestNotFound {
                id: harvest_id,
                plant_id,
            })?;

        tx.execute(DELETE_HARVEST_SQL, params![harvest_id as i64, plant_id as i64])
            .db_context("Failed to delete harvest")?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Deleted harvest {harvest_id} of plant {plant_id}");

        Ok(harvest)
    }
}
