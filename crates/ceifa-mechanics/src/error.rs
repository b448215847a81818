//! Error types for the combat engine.

/// Alias for `Result<T, CombatError>`.
pub type CombatResult<T> = Result<T, CombatError>;

/// Errors that can occur during combat operations.
///
/// State-machine transitions (incapacitation, death, revival, effect
/// expiry) are expected outcomes and never surface here; these variants
/// exist to reject caller contract violations and malformed persisted
/// state.
#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    /// A die or roll request that violates the caller contract.
    #[error("invalid dice: {0}")]
    InvalidDice(String),

    /// A rank string outside D/C/B/A/S.
    #[error("invalid rank: {0}")]
    InvalidRank(String),

    /// An effect id that is not in the catalog.
    #[error("unknown effect: {0}")]
    UnknownEffect(String),

    /// An effect application missing a required rank or duration.
    #[error("invalid effect: {0}")]
    InvalidEffect(String),

    /// A negative amount passed to a resource mutation.
    #[error("invalid amount: {0}")]
    InvalidAmount(i32),

    /// The roster is empty; no combatant holds the turn.
    #[error("no active combatant")]
    NoActiveCombatant,

    /// A persisted battle blob could not be decoded.
    #[error("malformed archive: {0}")]
    MalformedArchive(#[from] serde_json::Error),
}
