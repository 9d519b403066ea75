//! Integration tests for the workflow module.

use plate_cli::workflow::{GenerateRequest, generate_candidates, validate_record};
use plate_model::{IssuanceRecord, RecordField};

fn request(count: usize, seed: Option<u64>) -> GenerateRequest {
    GenerateRequest {
        vehicle_type: "Sedan".to_string(),
        plate_type: "Private".to_string(),
        region: "NCR".to_string(),
        count,
        seed,
    }
}

#[test]
fn single_candidate_goes_through_the_session() {
    let candidates = generate_candidates(&request(1, Some(11))).expect("generate");
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].plate_number.starts_with('A'));
    assert_eq!(candidates[0].region, "NCR");
}

#[test]
fn bulk_generation_honors_the_count() {
    let candidates = generate_candidates(&request(25, Some(12))).expect("generate");
    assert_eq!(candidates.len(), 25);
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = generate_candidates(&request(5, Some(77))).expect("generate");
    let b = generate_candidates(&request(5, Some(77))).expect("generate");
    let plates_a: Vec<&str> = a.iter().map(|c| c.plate_number.as_str()).collect();
    let plates_b: Vec<&str> = b.iter().map(|c| c.plate_number.as_str()).collect();
    assert_eq!(plates_a, plates_b);
}

#[test]
fn zero_count_still_produces_one_candidate() {
    // the session path treats anything up to one as a single request
    let candidates = generate_candidates(&request(0, Some(13))).expect("generate");
    assert_eq!(candidates.len(), 1);
}

#[test]
fn validate_outcome_carries_record_and_report() {
    let record = IssuanceRecord {
        plate_number: "ABC 1234".to_string(),
        plate_type: "Private".to_string(),
        region: "NCR".to_string(),
        plate_issue_date: "2024-01-01".to_string(),
        plate_expiration_date: "2023-01-01".to_string(),
    };
    let outcome = validate_record(record, "Sedan");
    assert_eq!(outcome.vehicle_type, "Sedan");
    assert!(!outcome.report.is_valid());
    assert_eq!(
        outcome.report.error_for(RecordField::PlateExpirationDate),
        Some("Expiration date must be after the issue date")
    );
}
