//! Domain-level error type used across the engine, the AI players and the
//! simulator.
//!
//! Only two kinds exist. `Validation` is recoverable and user-facing: an
//! action's preconditions failed and the game state was left untouched.
//! `Integrity` means an internal invariant is broken (bad catalog data or a
//! corrupt snapshot) and is never worth retrying.

use thiserror::Error;

use crate::errors::error_code::ErrorCode;

/// Which precondition a rejected action violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidPlayerCount,
    OutOfTurn,
    PhaseMismatch,
    InvalidCastle,
    AlreadyOwned,
    ClanClosed,
    InvalidLine,
    LineAlreadyCompleted,
    CannotAffordLine,
    NoDiceToRoll,
    GameOver,
    Malformed,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Action precondition or business rule violation
    #[error("validation error: {1}")]
    Validation(ValidationKind, String),
    /// Internal invariant violated
    #[error("integrity error: {0}")]
    Integrity(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn integrity(detail: impl Into<String>) -> Self {
        Self::Integrity(detail.into())
    }

    /// The validation kind, if this is a validation error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Integrity(_) => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(..))
    }

    /// Stable machine-readable code for the command layer.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => ErrorCode::from(*kind),
            DomainError::Integrity(_) => ErrorCode::Integrity,
        }
    }
}
