//! Error types for the garden library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::PlantStatus;

/// Comprehensive error type for all garden operations.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Garden bed not found for the given ID
    #[error("Garden bed with ID {id} not found")]
    BedNotFound { id: u64 },
    /// Plant not found for the given ID
    #[error("Plant with ID {id} not found")]
    PlantNotFound { id: u64 },
    /// Harvest not found, or not recorded against the given plant
    #[error("Harvest with ID {id} not found for plant {plant_id}")]
    HarvestNotFound { id: u64, plant_id: u64 },
    /// Requested status is not the single legal successor of the current one
    #[error(
        "Invalid status transition from {current} to {requested}; valid next status: {}",
        format_allowed(.allowed)
    )]
    InvalidTransition {
        current: PlantStatus,
        requested: PlantStatus,
        allowed: Vec<PlantStatus>,
    },
    /// Operation preconditions are not met by the current entity state
    #[error("Invalid state: {message}")]
    InvalidState { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn format_allowed(allowed: &[PlantStatus]) -> String {
    if allowed.is_empty() {
        "none (terminal status)".to_string()
    } else {
        allowed
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GardenError {
        GardenError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GardenError {
        GardenError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GardenError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for the not-found family (bed, plant, harvest).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GardenError::BedNotFound { .. }
                | GardenError::PlantNotFound { .. }
                | GardenError::HarvestNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GardenError::database(message).with_source(e))
    }
}

/// Result type alias for garden operations
pub type Result<T> = std::result::Result<T, GardenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_names_next_status() {
        let err = GardenError::InvalidTransition {
            current: PlantStatus::Planted,
            requested: PlantStatus::Flowering,
            allowed: vec![PlantStatus::Sprouted],
        };
        let message = err.to_string();
        assert!(message.contains("PLANTED"));
        assert!(message.contains("FLOWERING"));
        assert!(message.contains("valid next status: SPROUTED"));
    }

    #[test]
    fn test_invalid_transition_from_terminal() {
        let err = GardenError::InvalidTransition {
            current: PlantStatus::Finished,
            requested: PlantStatus::Planted,
            allowed: vec![],
        };
        assert!(err.to_string().contains("none (terminal status)"));
    }

    #[test]
    fn test_not_found_family() {
        assert!(GardenError::BedNotFound { id: 1 }.is_not_found());
        assert!(GardenError::PlantNotFound { id: 1 }.is_not_found());
        assert!(GardenError::HarvestNotFound { id: 1, plant_id: 2 }.is_not_found());
        assert!(!GardenError::invalid_input("quantity")
            .with_reason("must be at least 1")
            .is_not_found());
    }
}
