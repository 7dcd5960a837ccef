//! Code for working with [`Location`]s on the Othello board.

use crate::bitboard::Bitboard;
use crate::error::ParseLocationError;
use crate::EDGE_LENGTH;
use derive_more::{From, Into};
use std::fmt::{self, Display, Formatter, Write};
use std::iter::FromIterator;

/// A playable location on the Othello board, in 0-indexed interior coordinates.
/// Ordering is row-major.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location {
    row: u8,
    col: u8,
}

/// One of the eight unit steps on the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

/// A set of locations on the Othello board, which can be iterated to retrieve them.
/// Iteration is always row-major.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Convert from interior row and column coordinates.
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Convert from interior coordinates, or `None` if they fall outside the playable area.
    pub fn try_from_coords(row: usize, col: usize) -> Option<Self> {
        if row < EDGE_LENGTH && col < EDGE_LENGTH {
            Some(Self::from_coords(row, col))
        } else {
            None
        }
    }

    /// Convert from a row-major space index.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::from_coords(index / EDGE_LENGTH, index % EDGE_LENGTH)
    }

    /// Convert into a row-major space index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    /// Get the interior row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Get the coordinates of this location on the bordered grid.
    #[inline]
    pub fn to_grid(self) -> (usize, usize) {
        (self.row as usize + 1, self.col as usize + 1)
    }

    /// Every playable location, in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..EDGE_LENGTH * EDGE_LENGTH).map(Self::from_index)
    }
}

/// Convert this [`Location`] into string notation ("E3").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = "ABCDEFGH".chars().nth(self.col as usize).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row as usize).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

/// Build a [`Location`] from a 1-indexed string notation ("E3"), ignoring case.
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::try_from_coords(row.wrapping_sub(1), col).ok_or(ParseLocationError)
    }
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The (row, col) step taken by this direction.
    #[inline]
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains_index(loc.to_index())
    }

    /// Returns whether this list has no locations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add `loc` to this list.
    pub fn insert(&mut self, loc: Location) {
        self.0 |= Bitboard::from_index(loc.to_index());
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = self.0.first_index()?;
        self.0 ^= Bitboard::from_index(index);
        Some(Location::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::default();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
