//! Builder for creating and configuring Garden instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Garden;
use crate::{
    db::Database,
    error::{GardenError, Result},
};

/// Builder for creating and configuring Garden instances.
#[derive(Debug, Clone, Default)]
pub struct GardenBuilder {
    database_path: Option<PathBuf>,
}

impl GardenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/garden/garden.db` or `~/.local/share/garden/garden.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the configured garden, creating the database file and schema
    /// when they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::FileSystem` if the parent directory cannot be
    /// created, `GardenError::XdgDirectory` if no default location can be
    /// determined, and `GardenError::Database` if initialization fails.
    pub async fn build(self) -> Result<Garden> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GardenError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(|_| ()))
            .await
            .map_err(|e| GardenError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        debug!("Opened garden database at {}", db_path.display());
        Ok(Garden::new(db_path))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("garden")
            .place_data_file("garden.db")
            .map_err(|e| GardenError::XdgDirectory(e.to_string()))
    }
}
