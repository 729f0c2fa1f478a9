use bevy::prelude::{Deref, DerefMut, Resource};
use tic_tac_toe::game::Session;

use crate::confetti::ConfettiLauncher;

/// The one game shown on screen, celebrated with confetti.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct ActiveSession(Session<ConfettiLauncher>);
