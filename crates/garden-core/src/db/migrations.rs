//! Database schema initialization and migrations.

use log::info;

use crate::{
    error::{DatabaseResultExt, Result},
    validation::current_year,
};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Adds plant columns introduced after the first schema version.
    fn apply_migrations(&self) -> Result<()> {
        let plant_columns = [
            ("quantity", "INTEGER NOT NULL DEFAULT 1".to_string()),
            ("year", format!("INTEGER NOT NULL DEFAULT {}", current_year())),
            ("space_required", "INTEGER NOT NULL DEFAULT 4".to_string()),
            ("season", "TEXT".to_string()),
            ("barcode_code", "TEXT".to_string()),
            ("barcode_type", "TEXT".to_string()),
            ("barcode_product_name", "TEXT".to_string()),
            ("barcode_manufacturer", "TEXT".to_string()),
        ];

        for (column, definition) in plant_columns {
            if !self.has_column("plants", column)? {
                info!("Adding missing column plants.{column}");
                self.connection
                    .execute(
                        &format!("ALTER TABLE plants ADD COLUMN {column} {definition}"),
                        [],
                    )
                    .db_context("Failed to add column to plants table")?;
            }
        }

        self.connection
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_plants_year ON plants(year)",
                [],
            )
            .db_context("Failed to create plant year index")?;

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
