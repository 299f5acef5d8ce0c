//! Static castle catalog: castles, their clans, point values and lines.
//!
//! This table is read-only for the lifetime of the process. Castle and clan
//! ids are indexes into [`CASTLES`] and [`CLANS`].

use crate::domain::lines::{min_dice_total, Line, Symbol};

pub type CastleId = usize;
pub type ClanId = usize;

pub const CASTLE_COUNT: usize = 14;
pub const CLAN_COUNT: usize = 6;

/// Extra requirement added once a castle has been conquered.
pub const FORTIFICATION: Line = Line::symbol(Symbol::Daimyo, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clan {
    pub id: ClanId,
    pub name: &'static str,
    /// Bonus awarded to a single player owning every castle in the clan.
    pub set_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Castle {
    pub id: CastleId,
    pub name: &'static str,
    pub clan: ClanId,
    pub points: u32,
    base_lines: &'static [Line],
}

impl Castle {
    /// Ordered lines for an attack on this castle.
    ///
    /// A castle that has already been conquered once is fortified and gains
    /// one trailing daimyo line.
    pub fn lines(&self, conquered_once: bool) -> Vec<Line> {
        let mut lines = self.base_lines.to_vec();
        if conquered_once {
            lines.push(FORTIFICATION);
        }
        lines
    }

    /// Fewest dice an attack could possibly succeed with.
    pub fn min_dice(&self, conquered_once: bool) -> usize {
        let fortification = if conquered_once {
            FORTIFICATION.min_dice()
        } else {
            0
        };
        min_dice_total(self.base_lines) + fortification
    }
}

const fn inf(strength: u8) -> Line {
    Line::infantry(strength)
}

const fn arch(count: u8) -> Line {
    Line::symbol(Symbol::Archery, count)
}

const fn cav(count: u8) -> Line {
    Line::symbol(Symbol::Cavalry, count)
}

const fn dai(count: u8) -> Line {
    Line::symbol(Symbol::Daimyo, count)
}

pub static CLANS: [Clan; CLAN_COUNT] = [
    Clan {
        id: 0,
        name: "Oda",
        set_points: 10,
    },
    Clan {
        id: 1,
        name: "Tokugawa",
        set_points: 8,
    },
    Clan {
        id: 2,
        name: "Uesugi",
        set_points: 8,
    },
    Clan {
        id: 3,
        name: "Mori",
        set_points: 5,
    },
    Clan {
        id: 4,
        name: "Chosokabe",
        set_points: 4,
    },
    Clan {
        id: 5,
        name: "Shimazu",
        set_points: 3,
    },
];

pub static CASTLES: [Castle; CASTLE_COUNT] = [
    Castle {
        id: 0,
        name: "Kita",
        clan: 0,
        points: 3,
        base_lines: &[arch(2), cav(2)],
    },
    Castle {
        id: 1,
        name: "Azuchi",
        clan: 0,
        points: 4,
        base_lines: &[dai(2), inf(5), arch(1)],
    },
    Castle {
        id: 2,
        name: "Gifu",
        clan: 0,
        points: 2,
        base_lines: &[inf(3), dai(1), cav(1)],
    },
    Castle {
        id: 3,
        name: "Edo",
        clan: 1,
        points: 3,
        base_lines: &[inf(8), dai(1)],
    },
    Castle {
        id: 4,
        name: "Hamamatsu",
        clan: 1,
        points: 2,
        base_lines: &[cav(2), inf(4)],
    },
    Castle {
        id: 5,
        name: "Okazaki",
        clan: 1,
        points: 1,
        base_lines: &[inf(6)],
    },
    Castle {
        id: 6,
        name: "Kasugayama",
        clan: 2,
        points: 4,
        base_lines: &[inf(10), dai(1)],
    },
    Castle {
        id: 7,
        name: "Takada",
        clan: 2,
        points: 2,
        base_lines: &[arch(2), inf(3)],
    },
    Castle {
        id: 8,
        name: "Gassantoda",
        clan: 3,
        points: 2,
        base_lines: &[arch(1), cav(1), inf(4)],
    },
    Castle {
        id: 9,
        name: "Hiroshima",
        clan: 3,
        points: 3,
        base_lines: &[dai(1), arch(2), inf(2)],
    },
    Castle {
        id: 10,
        name: "Kochi",
        clan: 4,
        points: 2,
        base_lines: &[cav(2), inf(2)],
    },
    Castle {
        id: 11,
        name: "Oko",
        clan: 4,
        points: 1,
        base_lines: &[inf(4)],
    },
    Castle {
        id: 12,
        name: "Kagoshima",
        clan: 5,
        points: 2,
        base_lines: &[arch(1), inf(5)],
    },
    Castle {
        id: 13,
        name: "Obi",
        clan: 5,
        points: 1,
        base_lines: &[cav(1), inf(2)],
    },
];

/// Castle by id, if the id is in range.
pub fn castle(id: CastleId) -> Option<&'static Castle> {
    CASTLES.get(id)
}

pub fn clan(id: ClanId) -> Option<&'static Clan> {
    CLANS.get(id)
}

/// Castles belonging to `clan`, in catalog order.
pub fn clan_castles(clan: ClanId) -> impl Iterator<Item = &'static Castle> {
    CASTLES.iter().filter(move |c| c.clan == clan)
}
