//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper handles the empty case with a one-line message.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{GardenBed, Harvest, Plant};

/// Newtype wrapper for displaying a bed listing. Beds render as compact
/// summaries; their plants are not shown.
///
/// # Examples
///
/// ```rust
/// use garden_core::{display::Beds, models::GardenBed};
/// use jiff::Timestamp;
///
/// let bed = GardenBed {
///     id: 2,
///     name: "South Bed".to_string(),
///     dimensions: "4x8".to_string(),
///     notes: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
///     plants: vec![],
/// };
///
/// let output = Beds(vec![bed]).to_string();
/// assert!(output.contains("## South Bed (ID: 2)"));
/// assert_eq!(Beds(vec![]).to_string(), "No garden beds found.\n");
/// ```
pub struct Beds(pub Vec<GardenBed>);

impl Beds {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of beds in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Beds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No garden beds found.");
        }

        for bed in &self.0 {
            writeln!(f, "## {} (ID: {})", bed.name, bed.id)?;
            writeln!(f)?;
            let area = bed
                .area()
                .map(|a| format!("{a} sq ft"))
                .unwrap_or_else(|| "unknown".to_string());
            writeln!(f, "- **Dimensions**: {} ({area})", bed.dimensions)?;
            if let Some(notes) = &bed.notes {
                writeln!(f, "- **Notes**: {notes}")?;
            }
            writeln!(f, "- **Created**: {}", LocalDateTime(&bed.created_at))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a plant listing.
pub struct Plants(pub Vec<Plant>);

impl Plants {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plants in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plants found.")
        } else {
            for plant in &self.0 {
                write!(f, "{plant}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a plant's harvests with a pound total.
pub struct Harvests(pub Vec<Harvest>);

impl Harvests {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of harvests in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of all harvests in pounds.
    pub fn total_pounds(&self) -> f64 {
        self.0.iter().map(Harvest::pounds).sum()
    }
}

impl fmt::Display for Harvests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No harvests recorded.");
        }

        for harvest in &self.0 {
            write!(f, "{harvest}")?;
        }
        writeln!(f)?;
        writeln!(f, "**Total**: {:.2} lbs", self.total_pounds())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::models::HarvestUnit;

    #[test]
    fn test_empty_messages() {
        assert_eq!(Plants(vec![]).to_string(), "No plants found.\n");
        assert_eq!(Harvests(vec![]).to_string(), "No harvests recorded.\n");
    }

    #[test]
    fn test_harvest_total_in_pounds() {
        let harvest = |id, quantity, unit| Harvest {
            id,
            plant_id: 1,
            harvest_date: date(2024, 7, 1),
            quantity,
            unit,
            notes: None,
            created_at: Timestamp::now(),
        };
        let harvests = Harvests(vec![
            harvest(1, 1.5, HarvestUnit::Lbs),
            harvest(2, 8.0, HarvestUnit::Oz),
        ]);

        assert_eq!(harvests.total_pounds(), 2.0);
        assert!(harvests.to_string().contains("**Total**: 2.00 lbs"));
    }
}
