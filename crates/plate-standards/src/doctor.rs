#![deny(unsafe_code)]

use std::fmt;

use crate::catalog::{PlateTypeCatalog, VINTAGE_YEAR_CUTOFF};
use crate::regions::{PREFIX_ALPHABET, RegionTable};

/// Summary of what the embedded catalogs loaded to, for diagnostics.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub region_count: usize,
    pub prefix_alphabet: String,
    pub vehicle_rule_count: usize,
    pub default_set_len: usize,
    pub vintage_year_cutoff: i32,
}

impl DoctorReport {
    pub fn from_catalogs(regions: &RegionTable, plate_types: &PlateTypeCatalog) -> Self {
        Self {
            schema: "plate-registry.standards-doctor".to_string(),
            schema_version: 1,
            region_count: regions.len(),
            prefix_alphabet: PREFIX_ALPHABET.to_string(),
            vehicle_rule_count: plate_types.vehicle_rule_count(),
            default_set_len: plate_types.default_set().len(),
            vintage_year_cutoff: VINTAGE_YEAR_CUTOFF,
        }
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "regions={} prefixes={} vehicle-rules={} default-set={} vintage-cutoff={}",
            self.region_count,
            self.prefix_alphabet,
            self.vehicle_rule_count,
            self.default_set_len,
            self.vintage_year_cutoff
        )
    }
}
