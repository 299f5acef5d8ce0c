//! Error codes surfaced to the command layer.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! front end can key its messages on. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

use crate::errors::domain::ValidationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Player count outside 2..=6
    InvalidPlayerCount,
    /// Not this player's turn
    OutOfTurn,
    /// Action not allowed in the current phase
    PhaseMismatch,
    /// Unknown castle identifier
    InvalidCastle,
    /// The player already owns the castle
    AlreadyOwned,
    /// The castle's clan is conquered and closed
    ClanClosed,
    /// Line index outside the castle's line list
    InvalidLine,
    /// Line already completed in this attack
    LineAlreadyCompleted,
    /// Current dice cannot satisfy the line
    CannotAffordLine,
    /// No dice left to re-roll
    NoDiceToRoll,
    /// Game has finished
    GameOver,
    /// Snapshot bytes could not be parsed
    Malformed,
    /// Internal invariant violated
    Integrity,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            ErrorCode::OutOfTurn => "OUT_OF_TURN",
            ErrorCode::PhaseMismatch => "PHASE_MISMATCH",
            ErrorCode::InvalidCastle => "INVALID_CASTLE",
            ErrorCode::AlreadyOwned => "ALREADY_OWNED",
            ErrorCode::ClanClosed => "CLAN_CLOSED",
            ErrorCode::InvalidLine => "INVALID_LINE",
            ErrorCode::LineAlreadyCompleted => "LINE_ALREADY_COMPLETED",
            ErrorCode::CannotAffordLine => "CANNOT_AFFORD_LINE",
            ErrorCode::NoDiceToRoll => "NO_DICE_TO_ROLL",
            ErrorCode::GameOver => "GAME_OVER",
            ErrorCode::Malformed => "MALFORMED",
            ErrorCode::Integrity => "INTEGRITY",
        }
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
            ValidationKind::OutOfTurn => ErrorCode::OutOfTurn,
            ValidationKind::PhaseMismatch => ErrorCode::PhaseMismatch,
            ValidationKind::InvalidCastle => ErrorCode::InvalidCastle,
            ValidationKind::AlreadyOwned => ErrorCode::AlreadyOwned,
            ValidationKind::ClanClosed => ErrorCode::ClanClosed,
            ValidationKind::InvalidLine => ErrorCode::InvalidLine,
            ValidationKind::LineAlreadyCompleted => ErrorCode::LineAlreadyCompleted,
            ValidationKind::CannotAffordLine => ErrorCode::CannotAffordLine,
            ValidationKind::NoDiceToRoll => ErrorCode::NoDiceToRoll,
            ValidationKind::GameOver => ErrorCode::GameOver,
            ValidationKind::Malformed => ErrorCode::Malformed,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
