use crate::domain::catalog::{clan_castles, ClanId, CASTLES, CLANS};
use crate::domain::state::{GameState, PlayerId};

/// Single player owning every castle of `clan`, if there is one.
pub fn clan_conqueror(state: &GameState, clan: ClanId) -> Option<PlayerId> {
    let mut conqueror = None;
    for castle in clan_castles(clan) {
        let owner = state.owner(castle.id)?;
        match conqueror {
            None => conqueror = Some(owner),
            Some(p) if p != owner => return None,
            Some(_) => {}
        }
    }
    conqueror
}

/// A clan owned as a set is closed to every further attack.
pub fn is_clan_closed(state: &GameState, clan: ClanId) -> bool {
    clan_conqueror(state, clan).is_some()
}

/// Clans `player` holds as complete sets.
pub fn conquered_clan_count(state: &GameState, player: PlayerId) -> usize {
    CLANS
        .iter()
        .filter(|clan| clan_conqueror(state, clan.id) == Some(player))
        .count()
}

/// Points per player, indexed by player id.
///
/// A clan held as a set scores its set bonus once and its castles score
/// nothing individually; every other conquered castle scores its own points
/// for its owner.
pub fn scores(state: &GameState) -> Vec<u32> {
    let mut scores = vec![0u32; usize::from(state.player_count)];

    let conquerors: Vec<Option<PlayerId>> =
        CLANS.iter().map(|c| clan_conqueror(state, c.id)).collect();

    for (clan, conqueror) in CLANS.iter().zip(&conquerors) {
        if let Some(p) = conqueror {
            if let Some(score) = scores.get_mut(usize::from(*p)) {
                *score += clan.set_points;
            }
        }
    }

    for castle in &CASTLES {
        if conquerors[castle.clan].is_some() {
            continue;
        }
        if let Some(owner) = state.owner(castle.id) {
            if let Some(score) = scores.get_mut(usize::from(owner)) {
                *score += castle.points;
            }
        }
    }

    scores
}

/// Players sharing the best ranking once the game is over.
///
/// Ranking key is `score * 10 + clans held`, so clan sets break ties on raw
/// score. Empty while the game is still running.
pub fn winners(state: &GameState) -> Vec<PlayerId> {
    if !state.is_finished() {
        return Vec::new();
    }
    let keys: Vec<(PlayerId, u64)> = scores(state)
        .into_iter()
        .enumerate()
        .map(|(p, score)| {
            let p = p as PlayerId;
            let clans = conquered_clan_count(state, p) as u64;
            (p, u64::from(score) * 10 + clans)
        })
        .collect();

    let Some(best) = keys.iter().map(|&(_, key)| key).max() else {
        return Vec::new();
    };
    keys.into_iter()
        .filter(|&(_, key)| key == best)
        .map(|(p, _)| p)
        .collect()
}
