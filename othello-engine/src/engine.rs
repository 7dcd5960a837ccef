//! The Othello move rules, as plain functions over an explicitly passed [`Board`].
//!
//! A move is legal when it flanks at least one run of opponent pieces: walking
//! outward from the placed piece in some [`Direction`], one or more opponent
//! pieces are followed directly by a piece of the mover's own color. Committing
//! the move flips every such run in all eight directions.
//!
//! Scans rely on the border ring of the grid to terminate; see [`Board::get`].

use crate::error::IllegalMoveError;
use crate::{Board, Cell, Direction, Location, LocationList, Side};

/// Count the opponent pieces flanked by `side` when scanning from `loc` in `direction`.
///
/// Returns 0 when the scan reaches an empty cell or the border before one of
/// `side`'s pieces, and also when the adjacent cell already belongs to `side`:
/// a zero-length run captures nothing. The cell at `loc` itself is not read.
pub fn scan_capture(board: &Board, loc: Location, direction: Direction, side: Side) -> u8 {
    let own = Cell::from(side);
    let (d_row, d_col) = direction.offset();
    let (mut row, mut col) = loc.to_grid();
    let mut run = 0;

    loop {
        row = row.wrapping_add_signed(d_row);
        col = col.wrapping_add_signed(d_col);

        match board.get(row, col) {
            Cell::Empty | Cell::Border => return 0,
            cell if cell == own => return run,
            _ => run += 1,
        }
    }
}

/// Returns whether `side` may place a piece at `loc`. Never modifies the board.
pub fn is_legal_move(board: &Board, loc: Location, side: Side) -> bool {
    board.at(loc) == Cell::Empty
        && Direction::ALL
            .iter()
            .any(|&direction| scan_capture(board, loc, direction, side) > 0)
}

/// Get every legal move for `side`, in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> LocationList {
    Location::all()
        .filter(|&loc| is_legal_move(board, loc, side))
        .collect()
}

/// Place a piece for `side` at `loc` and flip every flanked run.
///
/// Returns the new board, or an [`IllegalMoveError`] (carrying the legal moves)
/// if `loc` is not a legal move for `side`. The input board is never modified.
pub fn commit_move(board: &Board, side: Side, loc: Location) -> Result<Board, IllegalMoveError> {
    if !is_legal_move(board, loc, side) {
        return Err(IllegalMoveError {
            side,
            location: loc,
            legal: legal_moves(board, side),
        });
    }

    let mut next = *board;
    next.place(loc, Cell::from(side));
    for &direction in Direction::ALL.iter() {
        let run = scan_capture(board, loc, direction, side);
        flip_run(&mut next, loc, direction, side, run);
    }
    Ok(next)
}

/// Returns true if neither side has a legal move.
pub fn is_terminal(board: &Board) -> bool {
    legal_moves(board, Side::Black).is_empty() && legal_moves(board, Side::White).is_empty()
}

/// Recolor the `run` cells following `loc` in `direction` to `side`.
fn flip_run(board: &mut Board, loc: Location, direction: Direction, side: Side, run: u8) {
    let (d_row, d_col) = direction.offset();
    let (mut row, mut col) = loc.to_grid();

    for _ in 0..run {
        row = row.wrapping_add_signed(d_row);
        col = col.wrapping_add_signed(d_col);
        board.set(row, col, Cell::from(side));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceCount;

    fn loc(row: usize, col: usize) -> Location {
        Location::from_coords(row, col)
    }

    #[test]
    fn opening_moves_for_black() {
        let moves: Vec<Location> = legal_moves(&Board::new(), Side::Black).collect();
        assert_eq!(moves, vec![loc(2, 4), loc(3, 5), loc(4, 2), loc(5, 3)]);
    }

    #[test]
    fn opening_moves_for_white() {
        let moves: Vec<Location> = legal_moves(&Board::new(), Side::White).collect();
        assert_eq!(moves, vec![loc(2, 3), loc(3, 2), loc(4, 5), loc(5, 4)]);
    }

    #[test]
    fn scan_capture_counts_run() {
        let mut board = Board::empty();
        board.place(loc(0, 0), Cell::Black);
        for col in 1..4 {
            board.place(loc(0, col), Cell::White);
        }
        assert_eq!(scan_capture(&board, loc(0, 4), Direction::West, Side::Black), 3);
        assert_eq!(scan_capture(&board, loc(0, 4), Direction::West, Side::White), 0);
        assert_eq!(scan_capture(&board, loc(0, 4), Direction::East, Side::Black), 0);
    }

    #[test]
    fn scan_capture_stops_at_border() {
        let mut board = Board::empty();
        for col in 0..8 {
            board.place(loc(7, col), Cell::White);
        }
        for &direction in Direction::ALL.iter() {
            assert_eq!(scan_capture(&board, loc(6, 0), direction, Side::Black), 0);
        }
    }

    #[test]
    fn zero_length_run_is_not_a_capture() {
        // Black at D4 is directly east of C4, then white, then black.
        let mut board = Board::empty();
        board.place(loc(3, 3), Cell::Black);
        board.place(loc(3, 4), Cell::White);
        board.place(loc(3, 5), Cell::Black);

        assert_eq!(scan_capture(&board, loc(3, 2), Direction::East, Side::Black), 0);
        assert!(!is_legal_move(&board, loc(3, 2), Side::Black));
        assert!(legal_moves(&board, Side::Black).is_empty());
    }

    #[test]
    fn commit_does_not_flip_through_adjacent_own_piece() {
        // From D2, the run south is flanked but the adjacent piece to the east is Black already.
        let mut board = Board::empty();
        board.place(loc(1, 4), Cell::Black);
        board.place(loc(1, 5), Cell::White);
        board.place(loc(1, 6), Cell::Black);
        board.place(loc(2, 3), Cell::White);
        board.place(loc(3, 3), Cell::Black);

        let next = commit_move(&board, Side::Black, loc(1, 3)).unwrap();
        assert_eq!(next.at(loc(2, 3)), Cell::Black);
        assert_eq!(next.at(loc(1, 5)), Cell::White);
        assert_eq!(next.count_pieces(), PieceCount { black: 5, white: 1 });
    }

    #[test]
    fn commit_flips_every_direction() {
        let board: Board = "
            X-X-X---
            -OOO----
            XO-OX---
            -OOO----
            X-X-X---
            --------
            --------
            --------"
            .parse()
            .unwrap();

        let next = commit_move(&board, Side::Black, loc(2, 2)).unwrap();
        for row in 1..4 {
            for col in 1..4 {
                assert_eq!(next.at(loc(row, col)), Cell::Black);
            }
        }
        assert_eq!(next.count_pieces(), PieceCount { black: 17, white: 0 });
    }

    #[test]
    fn commit_illegal_move_leaves_board_untouched() {
        let board = Board::new();
        let err = commit_move(&board, Side::Black, loc(2, 3)).unwrap_err();
        assert_eq!(err.side, Side::Black);
        assert_eq!(err.location, loc(2, 3));
        assert_eq!(err.legal, legal_moves(&board, Side::Black));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn commit_on_occupied_cell_is_illegal() {
        let board = Board::new();
        assert!(commit_move(&board, Side::Black, loc(3, 4)).is_err());
        assert!(commit_move(&board, Side::White, loc(3, 3)).is_err());
    }

    #[test]
    fn opening_position_is_not_terminal() {
        assert!(!is_terminal(&Board::new()));
        assert!(is_terminal(&Board::empty()));
    }
}
