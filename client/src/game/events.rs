use bevy::prelude::{Deref, Event};
use tic_tac_toe::game::{GameState, Mark};

/// Sent after every accepted move or restart with the new state.
#[derive(Clone, Debug, Deref, Event)]
pub struct StateUpdated(pub GameState);

#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct PlayerWon(pub Mark);

#[derive(Clone, Copy, Debug, Event)]
pub struct Draw;

#[derive(Clone, Copy, Debug, Event)]
pub struct RestartPressed;
