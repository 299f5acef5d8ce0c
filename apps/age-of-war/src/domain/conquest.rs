//! Castle and clan conquest.

use tracing::info;

use crate::domain::catalog::Castle;
use crate::domain::events::GameEvent;
use crate::domain::scoring::clan_conqueror;
use crate::domain::state::GameState;

/// Hand `castle` to the current player and close its clan if that completes
/// a set.
///
/// Only called once every line of the attacked castle is complete.
pub fn conquer_castle(state: &mut GameState, castle: &Castle, events: &mut Vec<GameEvent>) {
    let player = state.current_player;
    let previous_owner = state.owner(castle.id);

    state.castle_owner[castle.id] = Some(player);
    info!(
        player,
        castle = castle.name,
        previous_owner = ?previous_owner,
        "Castle conquered"
    );
    events.push(GameEvent::CastleConquered {
        player,
        castle: castle.id,
        previous_owner,
    });

    if clan_conqueror(state, castle.clan) == Some(player) {
        info!(player, clan = castle.clan, "Clan conquered");
        events.push(GameEvent::ClanConquered {
            player,
            clan: castle.clan,
        });
    }
}
