#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog {asset}: {message}")]
    Csv { asset: &'static str, message: String },

    #[error("invalid region row in {asset}: {message}")]
    InvalidRegion { asset: &'static str, message: String },

    #[error("duplicate region prefix '{prefix}' shared by {code} and {other}")]
    DuplicatePrefix {
        prefix: char,
        code: String,
        other: String,
    },

    #[error("region prefix '{prefix}' for {code} is outside the plate alphabet")]
    IllegalPrefix { prefix: char, code: String },

    #[error("region table does not define the default region {code}")]
    MissingDefaultRegion { code: &'static str },

    #[error("unknown plate type '{value}' in catalog row for {vehicle}")]
    UnknownPlateType { vehicle: String, value: String },

    #[error("plate-type catalog has no '{key}' row")]
    MissingCatalogRow { key: &'static str },

    #[error("plate-type set for {vehicle} is empty")]
    EmptyPlateTypeSet { vehicle: String },
}
