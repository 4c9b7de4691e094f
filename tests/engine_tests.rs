//! GameEngine integration tests: move validity, terminal detection, scenarios.

use oxo_engine::core::{Board, EngineConfig, GameState, Mark, TRIPLES};
use oxo_engine::rules::{GameEngine, Outcome};
use proptest::prelude::*;

fn engine_with(layout: &str) -> GameEngine {
    let board: Board = layout.parse().unwrap();
    GameEngine::from_state(EngineConfig::default(), GameState::with_board(board))
}

// =============================================================================
// Move Validity
// =============================================================================

#[test]
fn test_every_cell_valid_on_fresh_board() {
    for p in 0..9 {
        let mut engine = GameEngine::default();
        assert!(engine.is_valid_move(p));
        assert!(engine.apply_move(p, Mark::X));
        assert!(!engine.is_valid_move(p));
        assert_eq!(engine.moves_count(), 1);
    }
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::default();
    for p in [9, 10, 100, usize::MAX] {
        assert!(!engine.is_valid_move(p));
        assert!(!engine.apply_move(p, Mark::X));
    }
    assert_eq!(*engine.state(), GameState::new());
}

proptest! {
    #[test]
    fn prop_rejected_moves_change_nothing(
        moves in prop::collection::vec(0usize..9, 0..9),
        probe in 0usize..20,
    ) {
        let mut engine = GameEngine::default();
        let mut mark = Mark::X;
        for p in moves {
            if engine.apply_move(p, mark) {
                mark = mark.opponent();
            }
        }

        let before = *engine.state();
        if !engine.is_valid_move(probe) {
            prop_assert!(!engine.apply_move(probe, mark));
            prop_assert_eq!(*engine.state(), before);
        } else {
            prop_assert!(engine.apply_move(probe, mark));
            prop_assert_eq!(engine.moves_count(), before.moves_count() + 1);
            prop_assert!(!engine.is_valid_move(probe));
        }
    }

    #[test]
    fn prop_moves_count_matches_board(moves in prop::collection::vec(0usize..12, 0..20)) {
        let mut engine = GameEngine::default();
        let mut mark = Mark::X;
        for p in moves {
            if engine.apply_move(p, mark) {
                mark = mark.opponent();
            }
            prop_assert_eq!(
                usize::from(engine.moves_count()),
                engine.board().occupied_count()
            );
        }
    }
}

// =============================================================================
// Terminal Detection
// =============================================================================

#[test]
fn test_check_winner_every_triple() {
    for mark in Mark::ALL {
        for triple in TRIPLES {
            let mut engine = GameEngine::default();
            for i in triple {
                assert!(engine.apply_move(i, mark));
            }
            assert_eq!(
                engine.check_winner(),
                Some(Outcome::Winner(mark)),
                "triple {triple:?} for {mark}"
            );
        }
    }
}

#[test]
fn test_check_winner_column_and_diagonals() {
    assert_eq!(
        engine_with("X../X../X..").check_winner(),
        Some(Outcome::Winner(Mark::X))
    );
    assert_eq!(
        engine_with("X../.X./..X").check_winner(),
        Some(Outcome::Winner(Mark::X))
    );
    assert_eq!(
        engine_with("..O/.O./O..").check_winner(),
        Some(Outcome::Winner(Mark::O))
    );
}

#[test]
fn test_check_winner_none_until_full() {
    let engine = engine_with("XO./.../...");
    assert_eq!(engine.check_winner(), None);
}

#[test]
fn test_draw_scenario() {
    let engine = engine_with("XOXOXOOXO");
    assert_eq!(engine.moves_count(), 9);
    assert_eq!(engine.check_winner(), Some(Outcome::Draw));
}

#[test]
fn test_top_row_scenario() {
    let mut engine = GameEngine::default();
    let moves = [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)];
    for (pos, mark) in moves {
        assert!(engine.apply_move(pos, mark));
    }

    assert_eq!(engine.check_winner(), Some(Outcome::Winner(Mark::X)));
    assert!(!engine.is_game_over());

    engine.update_terminal_state();
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(Outcome::Winner(Mark::X)));

    // Terminal: no further moves.
    assert!(!engine.apply_move(8, Mark::O));
    assert_eq!(engine.moves_count(), 5);
}

#[test]
fn test_full_game_to_draw_via_engine() {
    let mut engine = GameEngine::default();
    // Ends as X O X / X O O / O X X.
    let order = [0, 4, 2, 1, 7, 5, 3, 6, 8];
    let marks = "XOXXOOOXX";
    let mut mark = Mark::X;
    for pos in order {
        let expected = marks.chars().nth(pos).and_then(Mark::from_char).unwrap();
        assert_eq!(expected, mark, "turn order for cell {pos}");
        assert!(engine.apply_move(pos, mark));
        engine.update_terminal_state();
        engine.advance_turn();
        mark = mark.opponent();
        if pos != 8 {
            assert!(!engine.is_game_over(), "game ended early at {pos}");
        }
    }
    assert!(engine.is_game_over());
    assert_eq!(engine.winner(), Some(Outcome::Draw));
}

#[test]
fn test_winner_set_iff_game_over() {
    let mut engine = GameEngine::default();
    let mut mark = Mark::X;
    for pos in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
        if engine.is_game_over() {
            break;
        }
        engine.apply_move(pos, mark);
        engine.update_terminal_state();
        assert_eq!(engine.is_game_over(), engine.winner().is_some());
        mark = mark.opponent();
    }
}

#[test]
fn test_reset_after_game() {
    let mut engine = engine_with("OOO/XX./...");
    engine.update_terminal_state();
    engine.reset_new_game();

    assert_eq!(*engine.state(), GameState::new());
    assert!(engine.apply_move(0, Mark::X));
}
