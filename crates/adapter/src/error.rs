use thiserror::Error;

use crate::filter::Dimension;

pub type Result<T> = std::result::Result<T, AdapterError>;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Dimension {0:?} cannot be aggregated")]
    UnsupportedDimension(Dimension),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("{0}")]
    Other(String),
}
