//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results share one message layout per resource
//! kind: a confirmation line naming the kind and ID, then (for creates and
//! updates) the full markdown of the resource.

use std::fmt;

use crate::models::{GardenBed, Harvest, Plant, PlantImage};

/// A record that can be named in an operation confirmation.
pub trait Resource: fmt::Display {
    /// Lower-case kind, e.g. `plant`.
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Short human label used in delete confirmations.
    fn label(&self) -> String;
}

impl Resource for GardenBed {
    const KIND: &'static str = "garden bed";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("'{}'", self.name)
    }
}

impl Resource for Plant {
    const KIND: &'static str = "plant";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("'{}' in {}", self.name, self.location())
    }
}

impl Resource for Harvest {
    const KIND: &'static str = "harvest";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        format!("of {} {} on {}", self.quantity, self.unit, self.harvest_date)
    }
}

impl Resource for PlantImage {
    const KIND: &'static str = "image";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> String {
        self.url.clone()
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use garden_core::{display::CreateResult, models::GardenBed};
/// use jiff::Timestamp;
///
/// let bed = GardenBed {
///     id: 1,
///     name: "Herb Bed".to_string(),
///     dimensions: "3x6".to_string(),
///     notes: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     plants: vec![],
/// };
///
/// let output = CreateResult::new(bed).to_string();
/// assert!(output.starts_with("Created garden bed with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations, with an
/// optional list of the changes made.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} {} (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}

/// Delete confirmation for a bed also reports what cascaded with it.
pub struct BedDeletion(pub GardenBed);

impl fmt::Display for BedDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DeleteResult::new(&self.0))?;
        if !self.0.plants.is_empty() {
            writeln!(
                f,
                "Also removed {} plant record(s) with their harvests and images.",
                self.0.plants.len()
            )?;
        }
        Ok(())
    }
}

impl<T: Resource> Resource for &T {
    const KIND: &'static str = T::KIND;

    fn id(&self) -> u64 {
        (*self).id()
    }

    fn label(&self) -> String {
        (*self).label()
    }
}
