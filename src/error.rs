//! Error type shared by the problem model, the TSPLIB reader, and the GA engine.

/// Errors reported by this crate.
///
/// Configuration and instance errors surface from constructors, before any
/// generation runs. [`TspError::InvalidIndex`] aborts a run instead of
/// producing a corrupt solution.
#[derive(Debug, thiserror::Error)]
pub enum TspError {
    /// A tour references a city index outside `[0, len)`.
    #[error("city index {index} out of range for instance of {len} cities")]
    InvalidIndex { index: usize, len: usize },

    /// A [`GaConfig`](crate::ga::GaConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The instance has no cities to visit.
    #[error("degenerate instance: {len} cities")]
    DegenerateInstance { len: usize },

    /// Two cities share the same external identifier.
    #[error("duplicate city id {0}")]
    DuplicateCityId(i64),

    /// Malformed TSPLIB input.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
