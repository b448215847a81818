//! Error types for the character model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or querying a character.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A vantage id does not exist in the catalog.
    #[error("unknown vantage: {0}")]
    UnknownVantage(String),

    /// A character level outside the leveling table.
    #[error("invalid level: {0} (expected 1-10)")]
    InvalidLevel(u8),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
