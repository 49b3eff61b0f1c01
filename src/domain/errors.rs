use thiserror::Error;

/// Errors that can occur while building the creature catalog
///
/// The team engine itself is total and never fails; the only fallible
/// surface in the domain is catalog construction from input data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate creature id in catalog: {0}")]
    DuplicateId(String),

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
