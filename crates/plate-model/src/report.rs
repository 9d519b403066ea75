use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RecordField;

/// Result of validating an issuance record.
///
/// Every applicable field error is collected, keyed by the field it belongs
/// to, so callers can re-render a form with inline messages in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<RecordField, String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first message per field wins; the
    /// checks are ordered so the most specific message lands first.
    pub fn push(&mut self, field: RecordField, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn error_for(&self, field: RecordField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}
