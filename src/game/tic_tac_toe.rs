use generic_array::typenum::U3;
use tracing::{debug, warn};

use super::grid::{Grid, GridIndex};
use super::{Cell, GameError, GameResult, Mark, Outcome};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 board, cells are addressed by [`GridIndex`] or by a row-major index 0-8.
pub type Board = Grid<Cell, U3, U3>;

/// Row-major cell indices of every line that wins the game.
const LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_combinations() -> [[GridIndex; 3]; 8] {
    LINES.map(|line| line.map(|i| GridIndex::from_linear(i, BOARD_SIZE)))
}

fn find_win(board: &Board) -> Option<(Mark, [GridIndex; 3])> {
    winning_combinations().into_iter().find_map(|line| {
        let [a, b, c] = line.map(|pos| board[pos]);
        match a.mark() {
            Some(mark) if a == b && b == c => Some((mark, line)),
            _ => None,
        }
    })
}

/// Classifies `board` without looking at whose turn it is.
///
/// Returns [`Outcome::Winner`] for the first line holding three equal marks,
/// [`Outcome::Draw`] if no line is won and the board is full, [`Outcome::Ongoing`] otherwise.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, _)) = find_win(board) {
        return Outcome::Winner(mark);
    }
    if board.cells().all(|cell| !cell.is_empty()) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Returns the cells of the first won line, if any.
pub fn winning_line(board: &Board) -> Option<[GridIndex; 3]> {
    find_win(board).map(|(_, line)| line)
}

/// Board, next player and outcome of a single game.
///
/// The value is never mutated in place: [`apply_move`] and [`reset`] return a new state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    active_player: Mark,
    outcome: Outcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            active_player: Mark::X,
            outcome: Outcome::Ongoing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is. Kept unchanged once the game is finished.
    pub fn active_player(&self) -> Mark {
        self.active_player
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    /// Returns the cell at row-major `index` or [`None`] if the index is out of the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        Board::index_of(index).map(|pos| self.board[pos])
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.board
            .cells()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn winning_line(&self) -> Option<[GridIndex; 3]> {
        match self.outcome {
            Outcome::Winner(_) => winning_line(&self.board),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        format!("Current Player: {}", self.active_player)
    }

    /// Text announcing the result, [`None`] while the game is in progress.
    pub fn banner(&self) -> Option<String> {
        match self.outcome {
            Outcome::Ongoing => None,
            Outcome::Winner(mark) => Some(format!("Winner: {}", mark)),
            Outcome::Draw => Some("It's a Draw!".to_string()),
        }
    }

    /// Restart is offered only after the game is finished.
    pub fn show_restart(&self) -> bool {
        self.is_finished()
    }
}

/// Returns a fresh game.
pub fn reset() -> GameState {
    GameState::new()
}

/// Places the active player's mark at row-major `index`.
///
/// Fails if `index` is outside 0-8, the game is finished or the cell is occupied.
/// A terminal move keeps `active_player`, any other move passes the turn.
pub fn try_apply_move(state: &GameState, index: usize) -> GameResult<GameState> {
    let pos =
        Board::index_of(index).ok_or_else(|| GameError::invalid_index(CELL_COUNT - 1, index))?;
    if state.is_finished() {
        return Err(GameError::GameIsFinished);
    }
    if !state.board[pos].is_empty() {
        return Err(GameError::cell_is_occupied(pos.row(), pos.col()));
    }

    let mut board = state.board.clone();
    board[pos] = state.active_player.into();
    let outcome = evaluate(&board);
    let active_player = if outcome.is_finished() {
        debug!("game finished: {}", outcome);
        state.active_player
    } else {
        state.active_player.opponent()
    };
    Ok(GameState {
        board,
        active_player,
        outcome,
    })
}

/// Same transition as [`try_apply_move`], but a rejected move returns `state` unchanged.
pub fn apply_move(state: GameState, index: usize) -> GameState {
    try_apply_move(&state, index).unwrap_or_else(|err| {
        match err {
            GameError::InvalidIndex { .. } => warn!("move ignored: {}", err),
            _ => debug!("move ignored: {}", err),
        }
        state
    })
}
