//! Issuance-record validation.
//!
//! Pure and infallible: every applicable field error is collected into the
//! returned report, so a form can show all inline messages in one pass.

use chrono::NaiveDate;

use plate_model::{IssuanceRecord, RecordField, ValidationReport};

use crate::formats::PlateFormat;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a filled issuance record before it is submitted for persistence.
///
/// The checks are evaluated independently; a report with an empty error map
/// means the record may be persisted.
pub fn validate_issuance(record: &IssuanceRecord, vehicle_type: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(message) = plate_number_issue(record, vehicle_type) {
        report.push(RecordField::PlateNumber, message);
    }
    if record.plate_type.trim().is_empty() {
        report.push(RecordField::PlateType, "Plate type is required");
    }
    if record.region.trim().is_empty() {
        report.push(RecordField::Region, "Region is required");
    }

    let issue_date = date_check(
        &record.plate_issue_date,
        RecordField::PlateIssueDate,
        "Issue date",
        &mut report,
    );
    let expiration_date = date_check(
        &record.plate_expiration_date,
        RecordField::PlateExpirationDate,
        "Expiration date",
        &mut report,
    );

    if let (Some(issued), Some(expires)) = (issue_date, expiration_date)
        && expires <= issued
    {
        report.push(
            RecordField::PlateExpirationDate,
            "Expiration date must be after the issue date",
        );
    }

    report
}

fn plate_number_issue(record: &IssuanceRecord, vehicle_type: &str) -> Option<String> {
    let plate_number = record.plate_number.trim();
    if plate_number.is_empty() {
        return Some("Plate number is required".to_string());
    }
    let format = PlateFormat::for_record(vehicle_type, &record.plate_type);
    if !format.matches(plate_number) {
        return Some(format!(
            "Plate number must match the format {}",
            format.describe()
        ));
    }
    None
}

/// Require and parse a date field, reporting on failure. Returns the parsed
/// date so the ordering check runs only when both ends are usable.
fn date_check(
    value: &str,
    field: RecordField,
    label: &str,
    report: &mut ValidationReport,
) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        report.push(field, format!("{label} is required"));
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            report.push(field, format!("{label} is not a valid date (expected YYYY-MM-DD)"));
            None
        }
    }
}
