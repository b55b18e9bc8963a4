//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use geocascade_source::SourceError;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Data source error (converted from the source library)
    #[error("{0}")]
    Source(#[from] SourceError),
}

impl CoreError {
    /// Whether it is expected behavior (bad credential, exhausted quota),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Source(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
