#![allow(dead_code)]

// tests/common/mod.rs
use age_of_war::{Die, GameEvent, GameSession, Move, SeededDice};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    game_test_support::logging::init();
}

/// Compact dice notation: `1`/`2`/`3` infantry, `A`rchery, `C`avalry,
/// `D`aimyo. Whitespace is ignored.
pub fn dice(faces: &str) -> Vec<Die> {
    faces
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '1' => Die::Infantry1,
            '2' => Die::Infantry2,
            '3' => Die::Infantry3,
            'A' => Die::Archery,
            'C' => Die::Cavalry,
            'D' => Die::Daimyo,
            other => panic!("unknown die token {other:?}"),
        })
        .collect()
}

/// Dispatch a chosen move onto the matching session action.
pub fn apply<D: age_of_war::DiceRoller>(
    session: &mut GameSession<D>,
    player: age_of_war::PlayerId,
    mv: Move,
) -> Result<Vec<GameEvent>, age_of_war::DomainError> {
    match mv {
        Move::Attack { castle } => session.attack(player, castle),
        Move::CompleteLine { line } => session.complete_line(player, line),
        Move::Roll => session.roll(player),
    }
}

/// Start a seeded game.
pub fn seeded_session(players: u8, seed: u64) -> (GameSession<SeededDice>, Vec<GameEvent>) {
    GameSession::start(players, SeededDice::new(seed)).expect("valid player count")
}
