//! The plate-type catalog: which plate types a vehicle may be issued.
//!
//! Most vehicle types share the default set; a handful carry their own
//! rows, and any vehicle with a model year before the vintage cutoff is
//! offered the vintage set regardless of its nominal type.

use std::collections::BTreeMap;

use plate_model::PlateType;

use crate::error::CatalogError;

const PLATE_TYPES_CSV: &str = include_str!("../standards/plate_types.csv");
const PLATE_TYPES_ASSET: &str = "standards/plate_types.csv";

const DEFAULT_KEY: &str = "default";
const VINTAGE_KEY: &str = "Vintage";

/// Model years strictly below this value select the vintage rule set.
pub const VINTAGE_YEAR_CUTOFF: i32 = 1980;

/// Immutable vehicle-type to plate-type association, constructed once at
/// catalog load.
#[derive(Debug, Clone)]
pub struct PlateTypeCatalog {
    by_vehicle: BTreeMap<String, Vec<PlateType>>,
    default_set: Vec<PlateType>,
    vintage_set: Vec<PlateType>,
}

impl PlateTypeCatalog {
    /// Parse and verify the embedded plate-type asset. The `default` and
    /// `Vintage` rows must be present and every set must be non-empty.
    pub fn load() -> Result<Self, CatalogError> {
        let rows = parse_plate_types_csv()?;

        let mut by_vehicle = BTreeMap::new();
        let mut default_set = None;
        for (vehicle, set) in rows {
            if set.is_empty() {
                return Err(CatalogError::EmptyPlateTypeSet { vehicle });
            }
            if vehicle.eq_ignore_ascii_case(DEFAULT_KEY) {
                default_set = Some(set);
            } else {
                by_vehicle.insert(vehicle.to_uppercase(), set);
            }
        }

        let default_set = default_set.ok_or(CatalogError::MissingCatalogRow {
            key: DEFAULT_KEY,
        })?;
        let vintage_set = by_vehicle
            .get(&VINTAGE_KEY.to_uppercase())
            .cloned()
            .ok_or(CatalogError::MissingCatalogRow { key: VINTAGE_KEY })?;

        Ok(Self {
            by_vehicle,
            default_set,
            vintage_set,
        })
    }

    /// Plate types a vehicle may be issued.
    ///
    /// A parsable model year below [`VINTAGE_YEAR_CUTOFF`] wins over the
    /// vehicle type; otherwise the vehicle's own row applies, and anything
    /// without a row gets the default set.
    pub fn allowed(&self, vehicle_type: &str, year: Option<&str>) -> &[PlateType] {
        if let Some(year) = year
            && let Ok(year) = year.trim().parse::<i32>()
            && year < VINTAGE_YEAR_CUTOFF
        {
            return &self.vintage_set;
        }
        self.by_vehicle
            .get(&vehicle_type.trim().to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.default_set)
    }

    /// The rule set applied under the vintage year rule.
    pub fn vintage_set(&self) -> &[PlateType] {
        &self.vintage_set
    }

    /// The fallback set for vehicle types without their own row.
    pub fn default_set(&self) -> &[PlateType] {
        &self.default_set
    }

    /// Number of vehicle-specific rows (the default row not included).
    pub fn vehicle_rule_count(&self) -> usize {
        self.by_vehicle.len()
    }
}

fn parse_plate_types_csv() -> Result<Vec<(String, Vec<PlateType>)>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(PLATE_TYPES_CSV.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            asset: PLATE_TYPES_ASSET,
            message: e.to_string(),
        })?
        .clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::Csv {
            asset: PLATE_TYPES_ASSET,
            message: e.to_string(),
        })?;

        let get = |name: &str| -> Option<String> {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
        };

        let vehicle = get("Vehicle Type").ok_or_else(|| CatalogError::Csv {
            asset: PLATE_TYPES_ASSET,
            message: "missing Vehicle Type".to_string(),
        })?;
        let raw_set = get("Plate Types").unwrap_or_default();

        let mut set = Vec::new();
        for value in raw_set.split('|').map(str::trim).filter(|v| !v.is_empty()) {
            let plate_type =
                value
                    .parse::<PlateType>()
                    .map_err(|_| CatalogError::UnknownPlateType {
                        vehicle: vehicle.clone(),
                        value: value.to_string(),
                    })?;
            if !set.contains(&plate_type) {
                set.push(plate_type);
            }
        }

        rows.push((vehicle, set));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vehicle_gets_default_eight_element_set() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        let allowed = catalog.allowed("UnknownType", None);
        assert_eq!(allowed.len(), 8);
        assert_eq!(allowed, catalog.default_set());
    }

    #[test]
    fn pre_cutoff_year_selects_vintage_set_for_any_vehicle() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        let allowed = catalog.allowed("Sedan", Some("1975"));
        assert_eq!(allowed, catalog.vintage_set());
        assert!(allowed.contains(&PlateType::Vintage));
        // general-purpose categories stay reachable under the vintage rule
        assert!(allowed.contains(&PlateType::Private));
    }

    #[test]
    fn cutoff_year_itself_does_not_trigger_vintage() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        let allowed = catalog.allowed("Sedan", Some("1980"));
        assert_eq!(allowed, catalog.default_set());
    }

    #[test]
    fn unparseable_year_is_ignored() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        assert_eq!(
            catalog.allowed("Sedan", Some("not-a-year")),
            catalog.default_set()
        );
    }

    #[test]
    fn two_wheel_row_applies_case_insensitively() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        let allowed = catalog.allowed("2-wheel", None);
        assert!(allowed.contains(&PlateType::Private));
        assert!(!allowed.contains(&PlateType::Diplomatic));
    }

    #[test]
    fn every_set_is_non_empty() {
        let catalog = PlateTypeCatalog::load().expect("load plate-type catalog");
        for vehicle in ["2-Wheel", "Electric", "Hybrid", "Trailer", "Vintage", "Sedan"] {
            assert!(!catalog.allowed(vehicle, None).is_empty(), "{vehicle}");
        }
    }
}
