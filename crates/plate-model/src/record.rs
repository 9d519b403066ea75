use serde::{Deserialize, Serialize};

/// A generated-but-not-yet-issued plate number, subject to user acceptance
/// or regeneration before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateCandidate {
    pub plate_number: String,
    pub vehicle_type: String,
    pub plate_type: String,
    pub region: String,
}

/// The issuance record a caller submits for validation before persistence.
///
/// All fields are kept textual, exactly as they arrive from the registration
/// form; the validator owns parsing and format checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceRecord {
    pub plate_number: String,
    pub plate_type: String,
    pub region: String,
    /// Issue date, `YYYY-MM-DD`.
    pub plate_issue_date: String,
    /// Expiration date, `YYYY-MM-DD`. Must fall strictly after the issue date.
    pub plate_expiration_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_form_field_names() {
        let record = IssuanceRecord {
            plate_number: "ABC 1234".to_string(),
            plate_type: "Private".to_string(),
            region: "NCR".to_string(),
            plate_issue_date: "2024-01-01".to_string(),
            plate_expiration_date: "2027-01-01".to_string(),
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["plateNumber"], "ABC 1234");
        assert_eq!(json["plateExpirationDate"], "2027-01-01");
        let round: IssuanceRecord = serde_json::from_value(json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
