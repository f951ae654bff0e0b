//! Database operations and SQLite management for beds, plants and harvests.
//!
//! This module provides the low-level repository for the garden core. It
//! owns the SQLite connection, applies the schema, and enforces the
//! referential rules: a plant must reference an existing bed, a harvest an
//! existing plant in a harvestable state, and deletes cascade explicitly
//! from bed to plants to harvests and images.
//!
//! Every mutating operation runs in a single `IMMEDIATE` transaction so that
//! its reads and writes are serialized against other writers and either
//! commit together or not at all.

use std::{fmt::Display, path::Path, str::FromStr, time::Duration};

use rusqlite::{types::Type, Connection, Row};

use crate::error::{DatabaseResultExt, Result};

pub mod bed_queries;
pub mod harvest_queries;
pub mod migrations;
pub mod plant_queries;
pub mod snapshot;

/// How long a writer waits for a competing transaction before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to configure busy timeout")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Reads a text column and parses it with `FromStr`.
pub(crate) fn parse_column<T>(row: &Row, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let text: String = row.get(idx)?;
    text.parse::<T>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            format!("Invalid value '{text}': {e}").into(),
        )
    })
}

/// Reads a nullable text column and parses it with `FromStr`.
pub(crate) fn parse_optional_column<T>(row: &Row, idx: usize) -> rusqlite::Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    let text: Option<String> = row.get(idx)?;
    text.map(|text| {
        text.parse::<T>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Text,
                format!("Invalid value '{text}': {e}").into(),
            )
        })
    })
    .transpose()
}
