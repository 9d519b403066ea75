mod catalog;
mod doctor;
mod error;
mod regions;

pub use catalog::{PlateTypeCatalog, VINTAGE_YEAR_CUTOFF};
pub use doctor::DoctorReport;
pub use error::CatalogError;
pub use regions::{DEFAULT_REGION, PREFIX_ALPHABET, Region, RegionTable};

use std::sync::LazyLock;

use plate_model::PlateType;

/// Both catalogs, loaded and verified together.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    pub regions: RegionTable,
    pub plate_types: PlateTypeCatalog,
}

impl StandardsRegistry {
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            regions: RegionTable::load()?,
            plate_types: PlateTypeCatalog::load()?,
        })
    }

    pub fn doctor(&self) -> DoctorReport {
        DoctorReport::from_catalogs(&self.regions, &self.plate_types)
    }
}

static REGISTRY: LazyLock<StandardsRegistry> =
    LazyLock::new(|| StandardsRegistry::load().expect("embedded catalogs are well-formed"));

/// The process-wide registry built from the embedded assets.
pub fn registry() -> &'static StandardsRegistry {
    &REGISTRY
}

/// Prefix letter encoding the issuing region.
pub fn region_prefix(code: &str) -> char {
    registry().regions.prefix(code)
}

/// Region code for a plate's first letter; unknown letters decode to
/// [`DEFAULT_REGION`].
pub fn region_for_prefix(letter: char) -> &'static str {
    registry().regions.code_for_prefix(letter)
}

/// All defined regions in catalog order.
pub fn region_list() -> &'static [Region] {
    registry().regions.regions()
}

/// Plate types a vehicle may be issued, honoring the vintage year rule.
pub fn allowed_plate_types(vehicle_type: &str, year: Option<&str>) -> &'static [PlateType] {
    registry().plate_types.allowed(vehicle_type, year)
}
