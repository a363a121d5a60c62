use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] facetnav_catalog::CatalogError),

    #[error("Search error: {0}")]
    Search(#[from] facetnav_adapter::AdapterError),

    #[error("Invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: f64, max: f64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
