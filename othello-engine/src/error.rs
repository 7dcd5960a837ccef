//! Error types for the Othello engine.

use crate::{Location, LocationList, Side};
use derive_more::{Display, Error, From};

/// A move was attempted that is not in the mover's current legal move set.
/// The board is left unchanged; `legal` lists the moves that would have been accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "{} cannot move at {}; legal moves: {}", side, location, legal)]
pub struct IllegalMoveError {
    pub side: Side,
    pub location: Location,
    pub legal: LocationList,
}

/// An error from [`crate::Game::apply_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum PlayError {
    #[display(fmt = "the game is over")]
    #[from(ignore)]
    GameOver,
    #[display(fmt = "{}", _0)]
    IllegalMove(IllegalMoveError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid side (expected \"black\" or \"white\")")]
pub struct ParseSideError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 cells, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unexpected character {:?} in board string", found)]
    InvalidCharacter { found: char },
}
