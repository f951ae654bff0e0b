//! Harvest model definition and unit normalization.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// Grams per pound.
pub const GRAMS_PER_POUND: f64 = 453.592;
/// Ounces per pound.
pub const OUNCES_PER_POUND: f64 = 16.0;
/// Pounds per kilogram.
pub const POUNDS_PER_KILOGRAM: f64 = 2.20462;

/// Units a harvest can be weighed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum HarvestUnit {
    #[default]
    Lbs,
    Oz,
    G,
    Kg,
}

impl HarvestUnit {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HarvestUnit::Lbs => "lbs",
            HarvestUnit::Oz => "oz",
            HarvestUnit::G => "g",
            HarvestUnit::Kg => "kg",
        }
    }

    /// Converts a quantity in this unit to pounds.
    pub fn to_pounds(&self, quantity: f64) -> f64 {
        match self {
            HarvestUnit::Lbs => quantity,
            HarvestUnit::Oz => quantity / OUNCES_PER_POUND,
            HarvestUnit::G => quantity / GRAMS_PER_POUND,
            HarvestUnit::Kg => quantity * POUNDS_PER_KILOGRAM,
        }
    }
}

impl FromStr for HarvestUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lbs" | "lb" => Ok(HarvestUnit::Lbs),
            "oz" => Ok(HarvestUnit::Oz),
            "g" => Ok(HarvestUnit::G),
            "kg" => Ok(HarvestUnit::Kg),
            _ => Err(format!("Invalid harvest unit: {s} (expected lbs, oz, g or kg)")),
        }
    }
}

/// A single yield record for a plant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Harvest {
    /// Unique identifier for the harvest
    pub id: u64,

    /// ID of the plant the harvest was taken from
    pub plant_id: u64,

    /// Date of the harvest
    pub harvest_date: Date,

    /// Amount harvested, in `unit` (always positive)
    pub quantity: f64,

    /// Unit of `quantity`
    pub unit: HarvestUnit,

    /// Free-text notes
    pub notes: Option<String>,

    /// Timestamp when the record was created (UTC)
    pub created_at: Timestamp,
}

impl Harvest {
    /// Quantity normalized to pounds.
    pub fn pounds(&self) -> f64 {
        self.unit.to_pounds(self.quantity)
    }

    /// Month bucket key, `YYYY-MM`.
    pub fn month_key(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.harvest_date.year(),
            self.harvest_date.month()
        )
    }
}
