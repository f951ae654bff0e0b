//! Input validation shared by the repository operations.
//!
//! Each check returns [`GardenError::InvalidInput`] naming the offending
//! field. Checks that depend on the calendar take the current year as an
//! argument; [`current_year`] supplies it at the call sites.

use jiff::Zoned;

use crate::error::{GardenError, Result};

/// Earliest accepted tracking year.
pub const MIN_YEAR: i32 = 2000;

/// Current calendar year in the system time zone.
pub fn current_year() -> i32 {
    i32::from(Zoned::now().year())
}

fn parse_side(side: &str) -> Option<u32> {
    if side.is_empty() || !side.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    side.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Parses `LxW` into two positive integers.
///
/// ```rust
/// use garden_core::validation::parse_dimensions;
///
/// assert_eq!(parse_dimensions("3x6").unwrap(), (3, 6));
/// assert!(parse_dimensions("0x0").is_err());
/// assert!(parse_dimensions("3xN").is_err());
/// ```
pub fn parse_dimensions(dimensions: &str) -> Result<(u32, u32)> {
    let invalid = || {
        GardenError::invalid_input("dimensions").with_reason(format!(
            "'{dimensions}' must be two positive integers in the form LxW, e.g. 4x8"
        ))
    };

    let (length, width) = dimensions.trim().split_once('x').ok_or_else(invalid)?;
    match (parse_side(length), parse_side(width)) {
        (Some(length), Some(width)) => Ok((length, width)),
        _ => Err(invalid()),
    }
}

/// Rejects years outside `[MIN_YEAR, current_year + 1]`.
pub fn validate_year(year: i32, current_year: i32) -> Result<i32> {
    let max = current_year + 1;
    if (MIN_YEAR..=max).contains(&year) {
        Ok(year)
    } else {
        Err(GardenError::invalid_input("year")
            .with_reason(format!("{year} is outside the accepted range {MIN_YEAR}-{max}")))
    }
}

/// Rejects plant quantities below 1.
pub fn validate_quantity(quantity: i64) -> Result<u32> {
    if quantity < 1 {
        return Err(GardenError::invalid_input("quantity")
            .with_reason(format!("must be at least 1, got {quantity}")));
    }
    u32::try_from(quantity).map_err(|_| {
        GardenError::invalid_input("quantity").with_reason(format!("{quantity} is too large"))
    })
}

/// Rejects per-plant space below 1.
pub fn validate_space_required(space: i64) -> Result<u32> {
    if space < 1 {
        return Err(GardenError::invalid_input("space_required")
            .with_reason(format!("must be at least 1, got {space}")));
    }
    u32::try_from(space).map_err(|_| {
        GardenError::invalid_input("space_required").with_reason(format!("{space} is too large"))
    })
}

/// Rejects harvest quantities that are not strictly positive.
pub fn validate_harvest_quantity(quantity: f64) -> Result<f64> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(quantity)
    } else {
        Err(GardenError::invalid_input("quantity")
            .with_reason(format!("harvest quantity must be greater than 0, got {quantity}")))
    }
}

/// Rejects blank names.
pub fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        Err(GardenError::invalid_input(field).with_reason("must not be empty"))
    } else {
        Ok(())
    }
}

/// Rejects image URLs that are not absolute http(s) URLs.
pub fn validate_image_url(url: &str) -> Result<()> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') && !url.contains(char::is_whitespace) => {
            Ok(())
        }
        _ => Err(GardenError::invalid_input("url")
            .with_reason(format!("'{url}' is not an http(s) URL"))),
    }
}

/// Extracts the bed ID from a location reference.
///
/// Accepts `Bed N` (case-insensitive) or a bare `N`.
pub fn parse_location(location: &str) -> Result<u64> {
    let trimmed = location.trim();
    let id_part = match trimmed.split_once(char::is_whitespace) {
        Some((prefix, rest)) if prefix.eq_ignore_ascii_case("bed") => rest.trim(),
        Some(_) => "",
        None => trimmed,
    };

    id_part.parse::<u64>().map_err(|_| {
        GardenError::invalid_input("location").with_reason(format!(
            "'{location}' must be in the form 'Bed N' where N is an existing garden bed ID"
        ))
    })
}

/// Renders a bed ID as a location reference.
pub fn format_location(bed_id: u64) -> String {
    format!("Bed {bed_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_accepted() {
        assert_eq!(parse_dimensions("3x6").unwrap(), (3, 6));
        assert_eq!(parse_dimensions("4x8").unwrap(), (4, 8));
        assert_eq!(parse_dimensions(" 10x12 ").unwrap(), (10, 12));
    }

    #[test]
    fn test_dimensions_rejected() {
        for bad in ["0x0", "-1x5", "axb", "10", "10x", "x10", "3xN", "3x0", "", "3x6x2", "+3x6"] {
            let err = parse_dimensions(bad).unwrap_err();
            assert!(
                matches!(err, GardenError::InvalidInput { ref field, .. } if field == "dimensions"),
                "expected '{bad}' to be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_year_bounds() {
        let current = 2025;
        assert!(validate_year(1999, current).is_err());
        assert_eq!(validate_year(2000, current).unwrap(), 2000);
        assert_eq!(validate_year(current, current).unwrap(), current);
        assert_eq!(validate_year(current + 1, current).unwrap(), current + 1);
        assert!(validate_year(current + 2, current).is_err());
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert_eq!(validate_quantity(1).unwrap(), 1);
        assert_eq!(validate_quantity(12).unwrap(), 12);
    }

    #[test]
    fn test_space_required_bounds() {
        assert!(validate_space_required(0).is_err());
        assert_eq!(validate_space_required(4).unwrap(), 4);
    }

    #[test]
    fn test_harvest_quantity() {
        assert!(validate_harvest_quantity(0.0).is_err());
        assert!(validate_harvest_quantity(-1.5).is_err());
        assert!(validate_harvest_quantity(f64::NAN).is_err());
        assert_eq!(validate_harvest_quantity(2.5).unwrap(), 2.5);
    }

    #[test]
    fn test_location_parsing() {
        assert_eq!(parse_location("Bed 4").unwrap(), 4);
        assert_eq!(parse_location("bed  17").unwrap(), 17);
        assert_eq!(parse_location("9").unwrap(), 9);
        assert!(parse_location("Bed").is_err());
        assert!(parse_location("Bed four").is_err());
        assert!(parse_location("Pot 4").is_err());
        assert!(parse_location("").is_err());
    }

    #[test]
    fn test_location_round_trip() {
        assert_eq!(parse_location(&format_location(42)).unwrap(), 42);
    }

    #[test]
    fn test_image_url() {
        assert!(validate_image_url("https://example.com/a.jpg").is_ok());
        assert!(validate_image_url("http://example.com").is_ok());
        assert!(validate_image_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_image_url("https://").is_err());
        assert!(validate_image_url("not a url").is_err());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("name", "Tomato").is_ok());
        assert!(validate_name("name", "   ").is_err());
    }
}
