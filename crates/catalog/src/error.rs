use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid item '{id}': {reason}")]
    InvalidItem { id: String, reason: String },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("{0}")]
    Other(String),
}

impl CatalogError {
    /// Create an invalid item error
    pub fn invalid_item(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidItem {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
