use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(u32),

    #[error("Reference data unavailable: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Other(String),
}
