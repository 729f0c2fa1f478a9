use bevy::prelude::*;
use tic_tac_toe::game::Outcome;

use super::{ActiveSession, Draw, PlayerWon, RestartPressed, StateUpdated};
use crate::board::TilePressed;

pub fn apply_tap(
    mut session: ResMut<ActiveSession>,
    mut pressed: EventReader<TilePressed>,
    mut updated: EventWriter<StateUpdated>,
    mut won: EventWriter<PlayerWon>,
    mut draw: EventWriter<Draw>,
) {
    for event in pressed.read() {
        let before = session.state().clone();
        let after = session.tap(event.index()).clone();
        if after == before {
            debug!("tap on tile {} ignored", event.index());
            continue;
        }
        debug!("{} marked tile {}", before.active_player(), event.index());
        match after.outcome() {
            Outcome::Winner(mark) => {
                info!("player {} won", mark);
                won.send(PlayerWon(mark));
            }
            Outcome::Draw => {
                info!("game ended in a draw");
                draw.send(Draw);
            }
            Outcome::Ongoing => {}
        }
        updated.send(StateUpdated(after));
    }
}

pub fn restart(
    mut session: ResMut<ActiveSession>,
    mut pressed: EventReader<RestartPressed>,
    mut updated: EventWriter<StateUpdated>,
) {
    if pressed.read().count() == 0 {
        return;
    }
    if !session.state().show_restart() {
        debug!("restart ignored, game is still running");
        return;
    }
    info!("restart game");
    let state = session.restart().clone();
    updated.send(StateUpdated(state));
}
