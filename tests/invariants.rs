use tic_tac_toe::game::{apply_move, evaluate, reset, GameState, Mark};

/// Walks every reachable game and checks invariants after each accepted move.
fn walk(state: &GameState, visited: &mut usize) {
    *visited += 1;
    let x = state.count(Mark::X);
    let o = state.count(Mark::O);
    assert!(x == o || x == o + 1, "x: {}, o: {}", x, o);
    assert_eq!(state.outcome(), evaluate(state.board()));

    for i in 0..9 {
        let next = apply_move(state.clone(), i);
        let occupied = state.cell(i).is_some_and(|c| !c.is_empty());
        if state.is_finished() || occupied {
            assert_eq!(&next, state);
            continue;
        }
        assert_ne!(&next, state);
        assert_eq!(next.cell(i).and_then(|c| c.mark()), Some(state.active_player()));
        if next.is_finished() {
            assert_eq!(next.active_player(), state.active_player());
        } else {
            assert_eq!(next.active_player(), state.active_player().opponent());
        }
        walk(&next, visited);
    }
}

#[test]
fn every_reachable_game() {
    let mut visited = 0;
    walk(&reset(), &mut visited);
    // number of move sequences in tic-tac-toe including unfinished prefixes
    assert_eq!(visited, 549_946);
}

#[test]
fn out_of_range_index_is_ignored() {
    let state = apply_move(reset(), 4);
    for i in [9, 10, 100, usize::MAX] {
        assert_eq!(apply_move(state.clone(), i), state);
    }
}
