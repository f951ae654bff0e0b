//! Status and season enumerations for plants.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a planted batch.
///
/// Stages advance strictly along
/// `PLANTED -> SPROUTED -> FLOWERING -> HARVESTING -> FINISHED`; the legal
/// successor relation lives in [`crate::lifecycle`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlantStatus {
    /// Seed or seedling is in the ground
    #[default]
    Planted,

    /// First growth is visible
    Sprouted,

    /// Plant is flowering; harvests may be recorded from here on
    Flowering,

    /// At least one harvest has been taken
    Harvesting,

    /// Plant is spent (terminal)
    Finished,
}

impl PlantStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [PlantStatus; 5] = [
        PlantStatus::Planted,
        PlantStatus::Sprouted,
        PlantStatus::Flowering,
        PlantStatus::Harvesting,
        PlantStatus::Finished,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Planted => "PLANTED",
            PlantStatus::Sprouted => "SPROUTED",
            PlantStatus::Flowering => "FLOWERING",
            PlantStatus::Harvesting => "HARVESTING",
            PlantStatus::Finished => "FINISHED",
        }
    }

    /// Whether harvests may be recorded against a plant in this status.
    pub fn accepts_harvest(&self) -> bool {
        matches!(self, PlantStatus::Flowering | PlantStatus::Harvesting)
    }

    /// Whether the plant counts as active (anything but finished).
    pub fn is_active(&self) -> bool {
        *self != PlantStatus::Finished
    }

    /// Whether the plant counts as a success for ranking purposes.
    pub fn is_productive(&self) -> bool {
        matches!(self, PlantStatus::Harvesting | PlantStatus::Finished)
    }

    /// Get status with a consistent icon for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlantStatus::Planted => "○ Planted",
            PlantStatus::Sprouted => "◔ Sprouted",
            PlantStatus::Flowering => "✿ Flowering",
            PlantStatus::Harvesting => "➤ Harvesting",
            PlantStatus::Finished => "✓ Finished",
        }
    }
}

impl FromStr for PlantStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PLANTED" => Ok(PlantStatus::Planted),
            "SPROUTED" => Ok(PlantStatus::Sprouted),
            "FLOWERING" => Ok(PlantStatus::Flowering),
            "HARVESTING" => Ok(PlantStatus::Harvesting),
            "FINISHED" => Ok(PlantStatus::Finished),
            _ => Err(format!("Invalid plant status: {s}")),
        }
    }
}

/// Growing season a plant is associated with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    /// Every season, in calendar order.
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "SPRING",
            Season::Summer => "SUMMER",
            Season::Fall => "FALL",
            Season::Winter => "WINTER",
        }
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SPRING" => Ok(Season::Spring),
            "SUMMER" => Ok(Season::Summer),
            "FALL" | "AUTUMN" => Ok(Season::Fall),
            "WINTER" => Ok(Season::Winter),
            _ => Err(format!("Invalid season: {s}")),
        }
    }
}
