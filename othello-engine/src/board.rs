//! The Othello playing surface.
//!
//! A [`Board`] is a 10x10 grid: the 8x8 playable interior ringed by one layer of
//! [`Cell::Border`]. Directional scans stop when they reach the border, so the
//! move rules never have to bounds-check each step.
//!
//! [`Board::get`] and [`Board::set`] take grid coordinates in `[0, 9]`;
//! [`Board::at`] and [`Board::place`] take interior [`Location`]s.

use crate::error::ParseBoardError;
use crate::{utils, Location, Side, EDGE_LENGTH, GRID_LENGTH, NUM_SPACES};
use derive_more::Into;
use std::fmt;

/// The contents of one grid cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
    Border,
}

/// Piece tallies for both sides.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Into)]
pub struct PieceCount {
    pub black: u8,
    pub white: u8,
}

/// The complete board: 8x8 interior plus the border sentinel ring.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; GRID_LENGTH]; GRID_LENGTH],
}

impl Cell {
    /// The side whose piece occupies this cell, if any.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
            Cell::Empty | Cell::Border => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl PieceCount {
    /// Total number of pieces on the board.
    #[inline]
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    /// Pieces held by `side`.
    #[inline]
    pub fn of(self, side: Side) -> u8 {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }
}

impl Default for Board {
    /// Gets the standard starting layout.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout: Black on the main center diagonal, White on the other.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place(Location::from_coords(3, 3), Cell::Black);
        board.place(Location::from_coords(4, 4), Cell::Black);
        board.place(Location::from_coords(3, 4), Cell::White);
        board.place(Location::from_coords(4, 3), Cell::White);
        board
    }

    /// A board with the border ring and an empty interior.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Border; GRID_LENGTH]; GRID_LENGTH];
        for row in cells.iter_mut().take(EDGE_LENGTH + 1).skip(1) {
            for cell in row.iter_mut().take(EDGE_LENGTH + 1).skip(1) {
                *cell = Cell::Empty;
            }
        }
        Self { cells }
    }

    /// Read a grid cell. Coordinates outside the grid read as [`Cell::Border`].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(Cell::Border)
    }

    /// Overwrite an interior grid cell.
    /// Panics if `(row, col)` is on or outside the border, or if `cell` is [`Cell::Border`].
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        assert!((1..=EDGE_LENGTH).contains(&row) && (1..=EDGE_LENGTH).contains(&col));
        assert_ne!(cell, Cell::Border);
        self.cells[row][col] = cell;
    }

    /// Read the cell at an interior location.
    #[inline]
    pub fn at(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_grid();
        self.cells[row][col]
    }

    /// Overwrite the cell at an interior location.
    #[inline]
    pub fn place(&mut self, loc: Location, cell: Cell) {
        let (row, col) = loc.to_grid();
        self.set(row, col, cell);
    }

    /// Tally the Black and White pieces in the interior.
    pub fn count_pieces(&self) -> PieceCount {
        Location::all().fold(PieceCount::default(), |mut count, loc| {
            match self.at(loc).side() {
                Some(Side::Black) => count.black += 1,
                Some(Side::White) => count.white += 1,
                None => {}
            }
            count
        })
    }

    /// Count the empty interior spaces.
    pub fn empties(&self) -> u8 {
        NUM_SPACES as u8 - self.count_pieces().total()
    }

    /// Get the board with every Black and White piece exchanged.
    pub fn swap_colors(&self) -> Self {
        let mut swapped = *self;
        for loc in Location::all() {
            let cell = match self.at(loc) {
                Cell::Black => Cell::White,
                Cell::White => Cell::Black,
                other => other,
            };
            swapped.place(loc, cell);
        }
        swapped
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |row, col| {
            match self.at(Location::from_coords(row, col)) {
                Cell::Black => 'X',
                Cell::White => 'O',
                Cell::Empty => '.',
                Cell::Border => '*',
            }
        })
    }
}

/// Build a [`Board`] from the 64 interior cells in row-major order.
/// `X` is Black, `O` is White, and `-` or `.` is empty; whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Black),
                'O' => Ok(Cell::White),
                '-' | '.' => Ok(Cell::Empty),
                found => Err(ParseBoardError::InvalidCharacter { found }),
            })
            .collect::<Result<Vec<Cell>, _>>()?;

        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: cells.len() });
        }

        let mut board = Self::empty();
        for (index, cell) in cells.into_iter().enumerate() {
            board.place(Location::from_index(index), cell);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_ring_surrounds_empty_interior() {
        let board = Board::empty();
        for i in 0..GRID_LENGTH {
            assert_eq!(board.get(0, i), Cell::Border);
            assert_eq!(board.get(GRID_LENGTH - 1, i), Cell::Border);
            assert_eq!(board.get(i, 0), Cell::Border);
            assert_eq!(board.get(i, GRID_LENGTH - 1), Cell::Border);
        }
        assert!(Location::all().all(|loc| board.at(loc) == Cell::Empty));
    }

    #[test]
    fn get_outside_grid_reads_border() {
        let board = Board::new();
        assert_eq!(board.get(10, 3), Cell::Border);
        assert_eq!(board.get(3, 10), Cell::Border);
        assert_eq!(board.get(usize::MAX, 0), Cell::Border);
    }

    #[test]
    #[should_panic]
    fn set_on_border_panics() {
        Board::new().set(0, 4, Cell::Black);
    }

    #[test]
    #[should_panic]
    fn set_border_cell_panics() {
        Board::new().set(4, 4, Cell::Border);
    }

    #[test]
    fn starting_layout() {
        let board = Board::new();
        assert_eq!(board.get(4, 4), Cell::Black);
        assert_eq!(board.get(5, 5), Cell::Black);
        assert_eq!(board.get(4, 5), Cell::White);
        assert_eq!(board.get(5, 4), Cell::White);
        assert_eq!(board.count_pieces(), PieceCount { black: 2, white: 2 });
        assert_eq!(board.empties(), 60);
    }

    #[test]
    fn piece_count_into_tuple() {
        let (black, white): (u8, u8) = Board::new().count_pieces().into();
        assert_eq!((black, white), (2, 2));
    }

    #[test]
    fn swap_colors_exchanges_pieces() {
        let board: Board = "XXO-----".repeat(8).parse().unwrap();
        let swapped = board.swap_colors();
        assert_eq!(swapped.count_pieces(), PieceCount { black: 8, white: 16 });
        assert_eq!(swapped.swap_colors(), board);
    }

    #[test]
    fn parse_board() {
        let text = "
            --------
            --------
            --------
            ---XO---
            ---OX---
            --------
            --------
            --------";
        assert_eq!(text.parse::<Board>(), Ok(Board::new()));
    }

    #[test]
    fn parse_board_fail() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { found: 2 })
        );
        assert_eq!(
            "Q".repeat(64).parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter { found: 'Q' })
        );
    }

    #[test]
    fn display_board() {
        let rendered = Board::new().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[4], " 4 . . . X O . . . ");
        assert_eq!(lines[5], " 5 . . . O X . . . ");
    }
}
