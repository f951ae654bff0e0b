//! Plant model definition and attached records.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{PlantStatus, Season};
use crate::validation;

/// Default space each individual plant occupies, in square feet of bed area.
pub const DEFAULT_SPACE_REQUIRED: u32 = 4;

/// A planted batch of one species/variety, tracked through its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// ID of the owning garden bed
    pub bed_id: u64,

    /// Common name (used as the grouping key in statistics)
    pub name: String,

    /// Optional cultivar
    pub variety: Option<String>,

    /// Date the batch went into the ground
    pub planting_date: Date,

    /// Current lifecycle stage
    pub status: PlantStatus,

    /// Optional growing season
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,

    /// Tracking year, independent of the planting date
    pub year: i32,

    /// Number of individual plants in the batch (at least 1)
    pub quantity: u32,

    /// Space per individual plant, in square feet of bed area
    pub space_required: u32,

    /// Expected first harvest
    pub expected_harvest_date: Option<Date>,

    /// Free-text notes
    pub notes: Option<String>,

    /// Seed packet the batch came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_packet: Option<SeedPacket>,

    /// Attached photos
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<PlantImage>,

    /// Timestamp when the plant was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plant was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plant {
    /// Human-readable bed reference, e.g. `Bed 3`.
    pub fn location(&self) -> String {
        validation::format_location(self.bed_id)
    }

    /// Total bed area taken by the batch.
    pub fn space_used(&self) -> u64 {
        u64::from(self.quantity) * u64::from(self.space_required)
    }
}

/// Photo metadata attached to a plant. Image bytes live elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantImage {
    pub id: u64,
    pub plant_id: u64,
    pub url: String,
    pub description: Option<String>,
    pub taken_at: Timestamp,
}

/// Barcode symbologies found on seed packets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BarcodeType {
    #[serde(rename = "QR")]
    Qr,
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "UPC")]
    Upc,
}

impl BarcodeType {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeType::Qr => "QR",
            BarcodeType::Code128 => "CODE128",
            BarcodeType::Ean13 => "EAN13",
            BarcodeType::Upc => "UPC",
        }
    }
}

impl FromStr for BarcodeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QR" | "QRCODE" => Ok(BarcodeType::Qr),
            "CODE128" => Ok(BarcodeType::Code128),
            "EAN13" => Ok(BarcodeType::Ean13),
            "UPC" | "UPCA" => Ok(BarcodeType::Upc),
            _ => Err(format!("Invalid barcode type: {s}")),
        }
    }
}

/// Seed packet identification captured from its barcode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedPacket {
    pub code: String,
    pub barcode_type: BarcodeType,
    pub product_name: Option<String>,
    pub manufacturer: Option<String>,
}
