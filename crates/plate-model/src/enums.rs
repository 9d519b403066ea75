//! Type-safe enumerations for plate registry concepts.
//!
//! Plate types arrive as free-form strings from forms and catalogs;
//! these enums give the rest of the workspace a fixed vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a license plate, governing its character-class rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlateType {
    /// Privately owned vehicles.
    Private,
    /// For-hire / public-utility vehicles.
    ForHire,
    /// Government fleet vehicles.
    Government,
    /// Diplomatic corps vehicles. Region is not encoded on these plates.
    Diplomatic,
    /// Battery-electric vehicles.
    Electric,
    /// Hybrid-drive vehicles.
    Hybrid,
    /// Towed trailers.
    Trailer,
    /// Vehicles admitted under the vintage rule (model year before 1980).
    Vintage,
}

impl PlateType {
    /// Canonical display name as it appears in catalogs and on records.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlateType::Private => "Private",
            PlateType::ForHire => "For Hire",
            PlateType::Government => "Government",
            PlateType::Diplomatic => "Diplomatic",
            PlateType::Electric => "Electric",
            PlateType::Hybrid => "Hybrid",
            PlateType::Trailer => "Trailer",
            PlateType::Vintage => "Vintage",
        }
    }

    /// All plate types in catalog order.
    pub fn all() -> &'static [PlateType] {
        &[
            PlateType::Private,
            PlateType::ForHire,
            PlateType::Government,
            PlateType::Diplomatic,
            PlateType::Electric,
            PlateType::Hybrid,
            PlateType::Trailer,
            PlateType::Vintage,
        ]
    }
}

impl fmt::Display for PlateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlateType {
    type Err = String;

    /// Parse a plate-type string as written on forms (case-insensitive).
    /// "Public Utility" is the older name for the for-hire category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "PRIVATE" => Ok(PlateType::Private),
            "FOR HIRE" | "FOR-HIRE" | "FORHIRE" | "PUBLIC UTILITY" | "PUBLICUTILITY" => {
                Ok(PlateType::ForHire)
            }
            "GOVERNMENT" => Ok(PlateType::Government),
            "DIPLOMATIC" => Ok(PlateType::Diplomatic),
            "ELECTRIC" => Ok(PlateType::Electric),
            "HYBRID" => Ok(PlateType::Hybrid),
            "TRAILER" => Ok(PlateType::Trailer),
            "VINTAGE" => Ok(PlateType::Vintage),
            _ => Err(format!("Unknown plate type: {s}")),
        }
    }
}

/// Fields of an issuance record that validation can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    PlateNumber,
    PlateType,
    Region,
    PlateIssueDate,
    PlateExpirationDate,
}

impl RecordField {
    /// Field name as it appears in JSON payloads and form state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordField::PlateNumber => "plateNumber",
            RecordField::PlateType => "plateType",
            RecordField::Region => "region",
            RecordField::PlateIssueDate => "plateIssueDate",
            RecordField::PlateExpirationDate => "plateExpirationDate",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The vehicle-type string that selects the motorcycle plate formats.
pub const TWO_WHEEL: &str = "2-Wheel";

/// Returns true when the vehicle type selects motorcycle plate formats.
pub fn is_two_wheel(vehicle_type: &str) -> bool {
    vehicle_type.trim().eq_ignore_ascii_case(TWO_WHEEL)
}
