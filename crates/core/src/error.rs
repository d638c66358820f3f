#[derive(Debug, thiserror::Error)]
pub enum AudienceError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read catalog file: {0}")]
    CatalogRead(std::io::Error),
    #[error("failed to parse catalog: {0}")]
    CatalogParse(serde_json::Error),
    #[error("duplicate condition id {0} in catalog")]
    DuplicateCondition(i64),
}

pub type AudienceResult<T> = std::result::Result<T, AudienceError>;
