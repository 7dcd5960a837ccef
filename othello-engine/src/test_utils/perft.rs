//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking the move rules against known totals.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{engine, Board, Side};

/// Count the leaves `depth` plies below the starting position.
/// A pass counts as a ply; two passes in a row end the line early.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), Side::Black, depth, false)
}

fn leaves_below(board: Board, side: Side, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = engine::legal_moves(&board, side);
    if all_moves.is_empty() {
        // Both sides passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !side, depth - 1, true);
    }

    all_moves
        .filter_map(|mv| engine::commit_move(&board, side, mv).ok())
        .map(|next| leaves_below(next, !side, depth - 1, false))
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}
