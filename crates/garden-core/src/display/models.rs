//! Display implementations for domain models.
//!
//! Output is markdown: beds render as a top-level heading with their plants
//! nested below, plants as third-level headings with status icons.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    BarcodeType, GardenBed, Harvest, HarvestUnit, Plant, PlantImage, PlantStatus, Season,
};

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for HarvestUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for GardenBed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Dimensions: {}", self.dimensions)?;
        match self.area() {
            Some(area) => writeln!(f, "- Area: {area} sq ft")?,
            None => writeln!(f, "- Area: unknown")?,
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        if self.plants.is_empty() {
            writeln!(f, "\nNo plants in this bed.")?;
        } else {
            writeln!(f, "\n## Plants")?;
            writeln!(f)?;
            for plant in &self.plants {
                write!(f, "{plant}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variety = self
            .variety
            .as_deref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();
        writeln!(
            f,
            "### {}. {}{variety} ({})",
            self.id,
            self.name,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- Location: {}", self.location())?;
        writeln!(f, "- Planted: {}", self.planting_date)?;
        writeln!(f, "- Year: {}", self.year)?;
        if let Some(season) = self.season {
            writeln!(f, "- Season: {season}")?;
        }
        writeln!(f, "- Quantity: {}", self.quantity)?;
        writeln!(
            f,
            "- Space: {} sq ft each, {} sq ft total",
            self.space_required,
            self.space_used()
        )?;
        if let Some(expected) = self.expected_harvest_date {
            writeln!(f, "- Expected harvest: {expected}")?;
        }
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "{notes}")?;
            writeln!(f)?;
        }

        if let Some(packet) = &self.seed_packet {
            writeln!(f, "#### Seed Packet")?;
            writeln!(f)?;
            writeln!(f, "- Code: {} ({})", packet.code, packet.barcode_type)?;
            if let Some(product) = &packet.product_name {
                writeln!(f, "- Product: {product}")?;
            }
            if let Some(manufacturer) = &packet.manufacturer {
                writeln!(f, "- Manufacturer: {manufacturer}")?;
            }
            writeln!(f)?;
        }

        if !self.images.is_empty() {
            writeln!(f, "#### Images")?;
            writeln!(f)?;
            for image in &self.images {
                write!(f, "{image}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PlantImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => writeln!(f, "- [{description}]({})", self.url),
            None => writeln!(f, "- {}", self.url),
        }
    }
}

impl fmt::Display for Harvest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}. {}: {} {}",
            self.id, self.harvest_date, self.quantity, self.unit
        )?;
        if self.unit != HarvestUnit::Lbs {
            write!(f, " ({:.2} lbs)", self.pounds())?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " ({notes})")?;
        }
        writeln!(f)
    }
}
