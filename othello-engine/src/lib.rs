//! `othello-engine` implements the rules of Othello on a fixed 8x8 board.
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] holds the playing surface as a 10x10 grid of [`Cell`]s, with the
//!    8x8 interior ringed by a [`Cell::Border`] sentinel that stops directional scans.
//!  - [`engine`] contains the move rules as plain functions over an explicitly
//!    passed [`Board`]: legality tests, legal move enumeration, and committing moves.
//!  - [`Game`] is a high-level, safe interface that also tracks whose turn it is,
//!    applies the pass rule, and reports the final [`Outcome`].

pub mod bitboard;
pub mod engine;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;
mod utils;

pub use board::*;
pub use engine::{commit_move, is_legal_move, is_terminal, legal_moves};
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of playable spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on one edge of the grid, including the border ring.
pub const GRID_LENGTH: usize = EDGE_LENGTH + 2;

/// The number of playable spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
