use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input on the create path.
    #[error("{0}")]
    Validation(&'static str),

    #[error("String already exists in the system")]
    Duplicate,

    #[error("String does not exist in the system")]
    NotFound,

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Unable to parse natural language query")]
    UnparseableQuery,

    /// The query parsed, but into contradictory length bounds.
    #[error("Query parsed but resulted in conflicting filters")]
    ConflictingQuery,

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Rejections raised while turning request parameters into a filter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid filter parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid {expected} for {parameter}")]
    InvalidValue {
        parameter: &'static str,
        expected: &'static str,
    },

    #[error("min_length cannot be greater than max_length")]
    ConflictingBounds,
}
