pub mod enums;
pub mod record;
pub mod report;

pub use enums::{PlateType, RecordField, TWO_WHEEL, is_two_wheel};
pub use record::{IssuanceRecord, PlateCandidate};
pub use report::ValidationReport;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_serializes() {
        let candidate = PlateCandidate {
            plate_number: "ABC 1234".to_string(),
            vehicle_type: "Sedan".to_string(),
            plate_type: "Private".to_string(),
            region: "NCR".to_string(),
        };
        let json = serde_json::to_string(&candidate).expect("serialize candidate");
        let round: PlateCandidate = serde_json::from_str(&json).expect("deserialize candidate");
        assert_eq!(round.plate_number, "ABC 1234");
        assert_eq!(round.region, "NCR");
    }
}
