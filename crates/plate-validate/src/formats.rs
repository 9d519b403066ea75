//! Plate-number format selection.
//!
//! The validator re-derives the expected shape from the vehicle and plate
//! type rather than trusting whatever produced the number. The standard
//! branch accepts exactly three letters before the space; a vintage plate
//! stamped with its optional two-letter suffix does not pass it.

use std::sync::LazyLock;

use regex::Regex;

use plate_model::{PlateType, is_two_wheel};

static STANDARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}\s\d{4}$").expect("static regex"));
static DIPLOMATIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-\d{4}$").expect("static regex"));
static TWO_WHEEL_SHORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]-\d{3}$").expect("static regex"));
static TWO_WHEEL_LONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}-\d{5}$").expect("static regex"));

/// Which plate-number shape an issuance record is held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateFormat {
    /// Motorcycle shapes: `L-NNN` or `LL-NNNNN`.
    TwoWheel,
    /// Diplomatic shape: `CCC-NNNN`.
    Diplomatic,
    /// Everything else: `LLL NNNN`.
    Standard,
}

impl PlateFormat {
    /// Select the format for a record. The vehicle type wins over the plate
    /// type: a two-wheel vehicle is held to the motorcycle shapes even when
    /// its plate type would otherwise imply another format.
    pub fn for_record(vehicle_type: &str, plate_type: &str) -> Self {
        if is_two_wheel(vehicle_type) {
            return PlateFormat::TwoWheel;
        }
        match plate_type.parse::<PlateType>() {
            Ok(PlateType::Diplomatic) => PlateFormat::Diplomatic,
            _ => PlateFormat::Standard,
        }
    }

    pub fn matches(&self, plate_number: &str) -> bool {
        match self {
            PlateFormat::TwoWheel => {
                TWO_WHEEL_SHORT.is_match(plate_number) || TWO_WHEEL_LONG.is_match(plate_number)
            }
            PlateFormat::Diplomatic => DIPLOMATIC.is_match(plate_number),
            PlateFormat::Standard => STANDARD.is_match(plate_number),
        }
    }

    /// Human-readable shape for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            PlateFormat::TwoWheel => "L-NNN or LL-NNNNN",
            PlateFormat::Diplomatic => "CCC-NNNN",
            PlateFormat::Standard => "LLL NNNN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_type_wins_over_plate_type() {
        assert_eq!(
            PlateFormat::for_record("2-Wheel", "Diplomatic"),
            PlateFormat::TwoWheel
        );
        assert_eq!(
            PlateFormat::for_record("Sedan", "Diplomatic"),
            PlateFormat::Diplomatic
        );
        assert_eq!(
            PlateFormat::for_record("Sedan", "Private"),
            PlateFormat::Standard
        );
    }

    #[test]
    fn unknown_plate_type_uses_the_standard_shape() {
        assert_eq!(
            PlateFormat::for_record("Sedan", "Sidecar"),
            PlateFormat::Standard
        );
    }

    #[test]
    fn standard_shape_is_exact() {
        let format = PlateFormat::Standard;
        assert!(format.matches("ABC 1234"));
        assert!(!format.matches("abc 1234"));
        assert!(!format.matches("ABC  1234"));
        assert!(!format.matches("ABC-1234"));
        assert!(!format.matches("ABCD 1234"));
        assert!(!format.matches("AB 1234"));
        assert!(!format.matches("ABC 123"));
    }

    #[test]
    fn two_wheel_shapes() {
        let format = PlateFormat::TwoWheel;
        assert!(format.matches("A-123"));
        assert!(format.matches("AB-12345"));
        assert!(!format.matches("A-1234"));
        assert!(!format.matches("ABC 1234"));
        assert!(!format.matches("AB-123"));
    }

    #[test]
    fn diplomatic_shape() {
        let format = PlateFormat::Diplomatic;
        assert!(format.matches("USA-1234"));
        assert!(!format.matches("USA 1234"));
        assert!(!format.matches("US-1234"));
    }
}
