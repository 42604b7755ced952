use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Missing required configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse trigger event: {0}")]
    EventError(String),

    #[error("Failed to access object storage: {0}")]
    StorageError(String),

    #[error("Failed to access record store: {0}")]
    RecordStoreError(String),

    #[error("Failed to invoke model: {0}")]
    ModelError(String),

    #[error("Model response was not in the expected format: {0}")]
    ResponseFormatError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::ResponseFormatError(error.to_string())
    }
}
