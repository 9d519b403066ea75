use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("a candidate already exists for region {region}; pick a different region to draw again")]
    RegenerationRefused { region: String },
}
