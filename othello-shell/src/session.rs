//! A game between two registered players, reporting each attempted move.

use othello_engine::{
    Game, IllegalMoveError, Location, Outcome, PieceCount, PlayError, Side, Turn,
};
use std::fmt;

use crate::player::Roster;

/// What happened when a side tried to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Played {
        side: Side,
        location: Location,
        flipped: u8,
        next: Turn,
    },
    Rejected(IllegalMoveError),
    OutOfTurn {
        expected: Side,
    },
    Finished(Verdict),
}

/// The final result, with the winner's registered name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub count: PieceCount,
    pub winner_name: Option<String>,
}

/// A game plus the players taking part in it.
#[derive(Clone, Debug)]
pub struct Session {
    game: Game,
    roster: Roster,
}

impl Session {
    /// Start a session from the standard opening.
    pub fn new(roster: Roster) -> Self {
        Self::with_game(Game::default(), roster)
    }

    pub fn with_game(game: Game, roster: Roster) -> Self {
        Self { game, roster }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Try to place a piece for `side`. The game only advances on [`Report::Played`].
    pub fn play(&mut self, side: Side, location: Location) -> Report {
        match self.game.turn {
            Turn::GameOver => return Report::Finished(self.final_verdict()),
            Turn::AwaitingMove(expected) if expected != side => {
                return Report::OutOfTurn { expected }
            }
            Turn::AwaitingMove(_) => {}
        }

        let before = self.game.piece_count().of(side);
        match self.game.apply_move(location) {
            Ok(next) => {
                self.game = next;
                Report::Played {
                    side,
                    location,
                    flipped: next.piece_count().of(side) - before - 1,
                    next: next.turn,
                }
            }
            Err(PlayError::IllegalMove(err)) => Report::Rejected(err),
            Err(PlayError::GameOver) => Report::Finished(self.final_verdict()),
        }
    }

    /// The result, once neither side can move.
    pub fn verdict(&self) -> Option<Verdict> {
        if self.game.is_finished() {
            Some(self.final_verdict())
        } else {
            None
        }
    }

    /// Score the board as it stands.
    fn final_verdict(&self) -> Verdict {
        let count = self.game.piece_count();
        let outcome = Outcome::from_count(count);
        Verdict {
            outcome,
            count,
            winner_name: outcome.winner().map(|side| self.roster.name_of(side)),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Played {
                side,
                location,
                flipped,
                next,
            } => {
                write!(f, "{} plays {}, flipping {}", side, location, flipped)?;
                match next {
                    Turn::AwaitingMove(next_side) if next_side == side => {
                        write!(f, "; {} has no move and passes", !*side)
                    }
                    Turn::AwaitingMove(_) => Ok(()),
                    Turn::GameOver => write!(f, "; no moves remain"),
                }
            }
            Report::Rejected(err) => write!(
                f,
                "Invalid move {} for {}. Here are the valid moves: {}",
                err.location, err.side, err.legal
            ),
            Report::OutOfTurn { expected } => write!(f, "Not your turn: {} to move", expected),
            Report::Finished(verdict) => write!(f, "{}", verdict),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game is ended. White pieces: {}, black pieces: {}. ",
            self.count.white, self.count.black
        )?;
        match self.outcome {
            Outcome::Winner(side) => write!(
                f,
                "Winner is {} player: {}",
                side.to_string().to_lowercase(),
                self.winner_name.as_deref().unwrap_or("unknown")
            ),
            Outcome::Tie => write!(f, "It's a tie"),
        }
    }
}
