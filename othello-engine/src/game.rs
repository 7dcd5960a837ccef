//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred, but callers that
//! manage turns themselves may use [`crate::engine`] directly.

use crate::error::{ParseSideError, PlayError};
use crate::{engine, Board, Location, LocationList, PieceCount};
use derive_more::Display;
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Side {
    Black,
    White,
}

/// Whose turn it is, or that the game has ended.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Turn {
    AwaitingMove(Side),
    GameOver,
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Outcome {
    #[display(fmt = "{} wins", _0)]
    Winner(Side),
    #[display(fmt = "Tie")]
    Tie,
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Game {
    pub board: Board,
    pub turn: Turn,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Parse a side name ("black", "White", "b", "W").
impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Side::Black),
            "white" | "w" => Ok(Side::White),
            _ => Err(ParseSideError),
        }
    }
}

impl Turn {
    /// The turn for a position where `side` is nominally to move.
    /// A side with no legal move is skipped; if neither side can move, the game is over.
    pub fn start(board: &Board, side: Side) -> Self {
        if !engine::legal_moves(board, side).is_empty() {
            Turn::AwaitingMove(side)
        } else if !engine::legal_moves(board, !side).is_empty() {
            Turn::AwaitingMove(!side)
        } else {
            Turn::GameOver
        }
    }

    /// The turn after `mover` has committed a move onto `board`.
    #[inline]
    pub fn after(board: &Board, mover: Side) -> Self {
        Self::start(board, !mover)
    }

    /// The side to move, if the game is still going.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Turn::AwaitingMove(side) => Some(side),
            Turn::GameOver => None,
        }
    }
}

impl Outcome {
    /// Decide the result from final piece counts: strictly more pieces wins.
    pub fn from_count(count: PieceCount) -> Self {
        use std::cmp::Ordering;
        match count.black.cmp(&count.white) {
            Ordering::Greater => Outcome::Winner(Side::Black),
            Ordering::Less => Outcome::Winner(Side::White),
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// The winning side, or `None` for a tie.
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(side),
            Outcome::Tie => None,
        }
    }
}

impl Default for Game {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::new(), Side::default())
    }
}

impl Game {
    /// Start a game from any position with `side` nominally to move.
    /// The pass rule is applied immediately; see [`Turn::start`].
    pub fn new(board: Board, side: Side) -> Self {
        Self {
            board,
            turn: Turn::start(&board, side),
        }
    }

    /// The side to move, or `None` once the game is over.
    #[inline]
    pub fn side_to_move(&self) -> Option<Side> {
        self.turn.side()
    }

    /// Get the legal moves for the side to move (empty once the game is over).
    pub fn legal_moves(&self) -> LocationList {
        match self.turn {
            Turn::AwaitingMove(side) => engine::legal_moves(&self.board, side),
            Turn::GameOver => LocationList::default(),
        }
    }

    /// Make a move for the side to move and advance the turn.
    pub fn apply_move(self, loc: Location) -> Result<Self, PlayError> {
        let side = self.side_to_move().ok_or(PlayError::GameOver)?;
        let board = engine::commit_move(&self.board, side, loc)?;

        Ok(Self {
            board,
            turn: Turn::after(&board, side),
        })
    }

    /// Returns true if neither side can move.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.turn == Turn::GameOver
    }

    /// Current piece tallies.
    #[inline]
    pub fn piece_count(&self) -> PieceCount {
        self.board.count_pieces()
    }

    /// The result of the game, available once it is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_finished() {
            Some(Outcome::from_count(self.piece_count()))
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        let count = self.piece_count();
        write!(f, "Black: {}  White: {}  ", count.black, count.white)?;
        match self.outcome() {
            Some(outcome) => write!(f, "(Game over: {})", outcome),
            None => write!(f, "({} to move)", self.side_to_move().unwrap_or_default()),
        }
    }
}
