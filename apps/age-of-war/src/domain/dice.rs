//! Dice faces and the dice-rolling port.
//!
//! The engine never touches a global random source directly. Every roll goes
//! through [`DiceRoller`], so tests can script exact faces and simulations
//! can replay a game from a seed.

use std::collections::VecDeque;
use std::fmt;

use rand::distr::{Distribution, StandardUniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Dice held at the start of every turn.
pub const START_DICE: usize = 7;

/// One face of the six-sided war die.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Die {
    Infantry1,
    Infantry2,
    Infantry3,
    Archery,
    Cavalry,
    Daimyo,
}

impl Die {
    pub const ALL: [Die; 6] = [
        Die::Infantry1,
        Die::Infantry2,
        Die::Infantry3,
        Die::Archery,
        Die::Cavalry,
        Die::Daimyo,
    ];

    /// Infantry strength of this face (0 for symbol faces).
    pub const fn infantry(self) -> u8 {
        match self {
            Die::Infantry1 => 1,
            Die::Infantry2 => 2,
            Die::Infantry3 => 3,
            _ => 0,
        }
    }

    pub const fn is_infantry(self) -> bool {
        self.infantry() > 0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Die::Infantry1 => "1 infantry",
            Die::Infantry2 => "2 infantry",
            Die::Infantry3 => "3 infantry",
            Die::Archery => "archery",
            Die::Cavalry => "cavalry",
            Die::Daimyo => "daimyo",
        };
        f.write_str(s)
    }
}

impl Distribution<Die> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Die {
        Die::ALL[rng.random_range(0..Die::ALL.len())]
    }
}

/// Source of fresh die faces.
pub trait DiceRoller {
    /// Roll `count` independent dice.
    fn roll(&mut self, count: usize) -> Vec<Die>;
}

impl<T: DiceRoller + ?Sized> DiceRoller for &mut T {
    fn roll(&mut self, count: usize) -> Vec<Die> {
        (**self).roll(count)
    }
}

impl<T: DiceRoller + ?Sized> DiceRoller for Box<T> {
    fn roll(&mut self, count: usize) -> Vec<Die> {
        (**self).roll(count)
    }
}

/// Production roller backed by the thread-local process RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngDice;

impl DiceRoller for ThreadRngDice {
    fn roll(&mut self, count: usize) -> Vec<Die> {
        let mut rng = rand::rng();
        (0..count).map(|_| rng.random()).collect()
    }
}

/// Deterministic roller: same seed, same faces.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceRoller for SeededDice {
    fn roll(&mut self, count: usize) -> Vec<Die> {
        (0..count).map(|_| self.rng.random()).collect()
    }
}

/// Roller that hands out a scripted sequence of faces.
///
/// Once the script is exhausted it cycles through [`Die::ALL`] so callers
/// never run dry.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    script: VecDeque<Die>,
    filler: usize,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = Die>) -> Self {
        Self {
            script: faces.into_iter().collect(),
            filler: 0,
        }
    }

    fn next_face(&mut self) -> Die {
        if let Some(face) = self.script.pop_front() {
            return face;
        }
        let face = Die::ALL[self.filler % Die::ALL.len()];
        self.filler += 1;
        face
    }
}

impl DiceRoller for ScriptedDice {
    fn roll(&mut self, count: usize) -> Vec<Die> {
        (0..count).map(|_| self.next_face()).collect()
    }
}
