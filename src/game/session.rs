use tracing::debug;

use super::tic_tac_toe::{apply_move, reset, GameState};
use super::Outcome;

/// Fire-and-forget celebration effect (confetti or similar) triggered when a game is won.
/// The session only starts and stops it, duration and visuals belong to the implementor.
#[cfg_attr(test, mockall::automock)]
pub trait Celebration {
    fn play(&mut self);
    fn stop(&mut self);
}

/// Headless sessions celebrate nothing.
impl Celebration for () {
    fn play(&mut self) {}

    fn stop(&mut self) {}
}

/// Game state together with the celebration it owns.
///
/// This is the layer that reacts to user input: it applies taps to the [`GameState`]
/// and plays the celebration exactly once for every transition from
/// [`Outcome::Ongoing`] to [`Outcome::Winner`].
#[derive(Debug, Default)]
pub struct Session<C> {
    state: GameState,
    celebration: C,
}

impl<C: Celebration> Session<C> {
    pub fn new(celebration: C) -> Self {
        Self {
            state: GameState::new(),
            celebration,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn celebration(&self) -> &C {
        &self.celebration
    }

    pub fn celebration_mut(&mut self) -> &mut C {
        &mut self.celebration
    }

    /// Applies a tap on the cell with row-major `index`.
    /// Invalid taps leave the state untouched.
    pub fn tap(&mut self, index: usize) -> &GameState {
        let was_finished = self.state.is_finished();
        self.state = apply_move(std::mem::take(&mut self.state), index);
        if let (false, Outcome::Winner(mark)) = (was_finished, self.state.outcome()) {
            debug!("{} won, starting celebration", mark);
            self.celebration.play();
        }
        &self.state
    }

    /// Starts a new game and stops the celebration if it's still running.
    pub fn restart(&mut self) -> &GameState {
        self.state = reset();
        self.celebration.stop();
        &self.state
    }
}
