//! The region table: region code to plate-prefix letter and back.
//!
//! Sixteen regions, one letter each, drawn from a fixed alphabet that skips
//! the ambiguous glyphs I, O and Q. Loaded once from an embedded CSV asset
//! and immutable afterwards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CatalogError;

const REGIONS_CSV: &str = include_str!("../standards/regions.csv");
const REGIONS_ASSET: &str = "standards/regions.csv";

/// The sixteen letters a region prefix may use.
pub const PREFIX_ALPHABET: &str = "ABCDEFGHJKLMNPRS";

/// Region code a plate decodes to when its first character matches no
/// known prefix.
pub const DEFAULT_REGION: &str = "NCR";

/// A plate-issuing region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: String,
    pub prefix: char,
    pub name: String,
}

/// Immutable region lookup table, constructed once at catalog load.
#[derive(Debug, Clone)]
pub struct RegionTable {
    regions: Vec<Region>,
    by_code: BTreeMap<String, usize>,
    by_prefix: BTreeMap<char, usize>,
}

impl RegionTable {
    /// Parse and verify the embedded region asset.
    ///
    /// Verification is structural: every prefix must be a single letter from
    /// [`PREFIX_ALPHABET`], no two regions may share one, and the default
    /// region must exist.
    pub fn load() -> Result<Self, CatalogError> {
        let regions = parse_regions_csv()?;

        let mut by_code = BTreeMap::new();
        let mut by_prefix: BTreeMap<char, usize> = BTreeMap::new();
        for (index, region) in regions.iter().enumerate() {
            if !PREFIX_ALPHABET.contains(region.prefix) {
                return Err(CatalogError::IllegalPrefix {
                    prefix: region.prefix,
                    code: region.code.clone(),
                });
            }
            if let Some(&other) = by_prefix.get(&region.prefix) {
                return Err(CatalogError::DuplicatePrefix {
                    prefix: region.prefix,
                    code: region.code.clone(),
                    other: regions[other].code.clone(),
                });
            }
            by_code.insert(region.code.to_uppercase(), index);
            by_prefix.insert(region.prefix, index);
        }

        if !by_code.contains_key(DEFAULT_REGION) {
            return Err(CatalogError::MissingDefaultRegion {
                code: DEFAULT_REGION,
            });
        }

        Ok(Self {
            regions,
            by_code,
            by_prefix,
        })
    }

    /// All regions in catalog order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&Region> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .map(|&index| &self.regions[index])
    }

    /// Prefix letter for a region code. Unknown codes resolve to the
    /// default region's prefix, mirroring the decode-side fallback.
    pub fn prefix(&self, code: &str) -> char {
        self.get(code)
            .or_else(|| self.get(DEFAULT_REGION))
            .map(|region| region.prefix)
            .unwrap_or('A')
    }

    /// Region code for a prefix letter. Anything that is not a known
    /// uppercase prefix decodes to the default region.
    pub fn code_for_prefix(&self, letter: char) -> &str {
        self.by_prefix
            .get(&letter)
            .map(|&index| self.regions[index].code.as_str())
            .unwrap_or(DEFAULT_REGION)
    }

    /// Region a plate number was issued in, judged by its first character.
    pub fn decode(&self, plate_number: &str) -> &str {
        match plate_number.chars().next() {
            Some(first) if first.is_ascii_uppercase() => self.code_for_prefix(first),
            _ => DEFAULT_REGION,
        }
    }
}

fn parse_regions_csv() -> Result<Vec<Region>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(REGIONS_CSV.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Csv {
            asset: REGIONS_ASSET,
            message: e.to_string(),
        })?
        .clone();

    let mut regions = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CatalogError::Csv {
            asset: REGIONS_ASSET,
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

        let code = get("Code").ok_or_else(|| CatalogError::InvalidRegion {
            asset: REGIONS_ASSET,
            message: "missing Code".to_string(),
        })?;
        let prefix_raw = get("Prefix").ok_or_else(|| CatalogError::InvalidRegion {
            asset: REGIONS_ASSET,
            message: format!("missing Prefix for {code}"),
        })?;
        let name = get("Name").unwrap_or_else(|| code.clone());

        let mut prefix_chars = prefix_raw.chars();
        let prefix = match (prefix_chars.next(), prefix_chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(CatalogError::InvalidRegion {
                    asset: REGIONS_ASSET,
                    message: format!("prefix for {code} must be a single letter"),
                });
            }
        };

        regions.push(Region { code, prefix, name });
    }

    Ok(regions)
}
