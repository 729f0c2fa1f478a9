pub mod error;
pub mod grid;
pub mod session;
pub mod state;
pub mod tic_tac_toe;

use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub use error::GameError;
pub use grid::GridIndex;
pub use session::{Celebration, Session};
pub use state::Outcome;
pub use tic_tac_toe::{apply_move, evaluate, reset, try_apply_move, Board, GameState};

pub type GameResult<T> = Result<T, GameError>;

/// Player symbol. X always moves first.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// Board cell, either empty or holding a [`Mark`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Cell(pub Option<Mark>);

impl Cell {
    pub const EMPTY: Cell = Cell(None);

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub fn mark(&self) -> Option<Mark> {
        self.0
    }
}

/// Empty cells render as a blank.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(mark) => write!(f, "{}", mark),
            None => f.write_str(" "),
        }
    }
}

impl From<Mark> for Cell {
    fn from(value: Mark) -> Self {
        Self(Some(value))
    }
}

impl Deref for Cell {
    type Target = Option<Mark>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
