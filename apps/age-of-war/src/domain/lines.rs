//! Line requirements and the affordability protocol.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;

/// Symbol faces a line can ask for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    Archery,
    Cavalry,
    Daimyo,
}

impl Symbol {
    pub const fn face(self) -> Die {
        match self {
            Symbol::Archery => Die::Archery,
            Symbol::Cavalry => Die::Cavalry,
            Symbol::Daimyo => Die::Daimyo,
        }
    }
}

/// One ordered requirement of a castle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Line {
    /// Infantry dice whose strengths sum to at least `strength`.
    Infantry { strength: u8 },
    /// `count` dice all showing `symbol`.
    Symbol { symbol: Symbol, count: u8 },
}

/// Outcome of checking a line against a roll.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Affordability {
    pub can_afford: bool,
    /// Dice the line would consume (0 when unaffordable).
    pub dice_used: usize,
}

impl Affordability {
    const NO: Self = Self {
        can_afford: false,
        dice_used: 0,
    };

    const fn yes(dice_used: usize) -> Self {
        Self {
            can_afford: true,
            dice_used,
        }
    }
}

impl Line {
    pub const fn infantry(strength: u8) -> Self {
        Line::Infantry { strength }
    }

    pub const fn symbol(symbol: Symbol, count: u8) -> Self {
        Line::Symbol { symbol, count }
    }

    /// Fewest dice that could ever satisfy this line.
    pub const fn min_dice(&self) -> usize {
        match *self {
            Line::Infantry { strength } => strength.div_ceil(3) as usize,
            Line::Symbol { count, .. } => count as usize,
        }
    }

    /// Check the line against `roll`, picking the fewest dice that satisfy it.
    ///
    /// Infantry lines take the strongest infantry dice first.
    pub fn can_afford(&self, roll: &[Die]) -> Affordability {
        match *self {
            Line::Infantry { strength } => {
                let mut infantry: Vec<u8> = roll
                    .iter()
                    .filter(|d| d.is_infantry())
                    .map(|d| d.infantry())
                    .collect();
                infantry.sort_unstable_by(|a, b| b.cmp(a));

                let mut total: u32 = 0;
                for (used, s) in infantry.into_iter().enumerate() {
                    if total >= u32::from(strength) {
                        return Affordability::yes(used);
                    }
                    total += u32::from(s);
                    if total >= u32::from(strength) {
                        return Affordability::yes(used + 1);
                    }
                }
                if strength == 0 {
                    Affordability::yes(0)
                } else {
                    Affordability::NO
                }
            }
            Line::Symbol { symbol, count } => {
                let face = symbol.face();
                let have = roll.iter().filter(|&&d| d == face).count();
                if have >= count as usize {
                    Affordability::yes(count as usize)
                } else {
                    Affordability::NO
                }
            }
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Line::Infantry { strength } => write!(f, "{strength} infantry"),
            Line::Symbol { symbol, count } => write!(f, "{count} x {}", symbol.face()),
        }
    }
}

/// Sum of minimum dice over a set of lines.
pub fn min_dice_total<'a>(lines: impl IntoIterator<Item = &'a Line>) -> usize {
    lines.into_iter().map(Line::min_dice).sum()
}
