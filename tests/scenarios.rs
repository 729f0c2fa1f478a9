use tic_tac_toe::game::{apply_move, evaluate, reset, Cell, GameState, Mark, Outcome};

fn play(state: GameState, moves: &[usize]) -> GameState {
    moves.iter().fold(state, |state, &i| apply_move(state, i))
}

fn assert_fresh(state: &GameState) {
    assert!(state.board().cells().all(Cell::is_empty));
    assert_eq!(state.active_player(), Mark::X);
    assert_eq!(state.outcome(), Outcome::Ongoing);
}

#[test]
fn row_win() {
    let state = play(reset(), &[0, 4, 1, 5, 2]);
    assert_eq!(evaluate(state.board()), Outcome::Winner(Mark::X));
    assert_eq!(state.outcome(), Outcome::Winner(Mark::X));
    itertools::assert_equal(
        state.winning_line().into_iter().flatten().map(|pos| pos.linear(3)),
        [0, 1, 2],
    );
}

#[test]
fn full_board_draw() {
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut state = reset();
    for (n, &i) in moves.iter().enumerate() {
        state = apply_move(state, i);
        if n + 1 < moves.len() {
            assert_eq!(state.outcome(), Outcome::Ongoing, "after move {}", n + 1);
        }
    }
    assert_eq!(state.outcome(), Outcome::Draw);
    assert_eq!(state.count(Mark::X), 5);
    assert_eq!(state.count(Mark::O), 4);
    assert_eq!(state.winning_line(), None);
}

#[test]
fn column_completed_before_board_is_full() {
    // X takes 0, 3 and 6 on its third move, the remaining taps are ignored
    let moves = [0, 1, 3, 2, 6, 5, 7, 8, 4];
    let won = play(reset(), &moves[..5]);
    assert_eq!(won.outcome(), Outcome::Winner(Mark::X));
    itertools::assert_equal(
        won.winning_line().into_iter().flatten().map(|pos| pos.linear(3)),
        [0, 3, 6],
    );
    assert_eq!(play(won.clone(), &moves[5..]), won);
}

#[test]
fn diagonal_win_then_ignored_move() {
    let state = play(reset(), &[0, 1, 4, 2, 8]);
    assert_eq!(state.outcome(), Outcome::Winner(Mark::X));
    itertools::assert_equal(
        state.winning_line().into_iter().flatten().map(|pos| pos.linear(3)),
        [0, 4, 8],
    );

    let after = apply_move(state.clone(), 3);
    assert_eq!(after, state);
    assert_eq!(after.cell(3), Some(Cell::EMPTY));
}

#[test]
fn reset_after_win() {
    let state = play(reset(), &[0, 1, 4, 2, 8]);
    assert!(state.is_finished());
    assert_ne!(state, reset());
    assert_fresh(&reset());
}

#[test]
fn reset_is_always_fresh() {
    let cases: [&[usize]; 4] = [&[], &[4], &[0, 1, 4, 2, 8], &[0, 1, 2, 4, 3, 5, 7, 6, 8]];
    for moves in cases {
        let state = play(reset(), moves);
        assert_eq!(state.board().cells().filter(|c| !c.is_empty()).count(), moves.len());
        assert_fresh(&reset());
    }
}
