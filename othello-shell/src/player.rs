//! Named players and the side each one plays.

use derive_more::{Display, Error};
use othello_engine::Side;

/// A person (or script) playing one side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    name: String,
    side: Side,
}

/// At most one player per side.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Roster {
    black: Option<Player>,
    white: Option<Player>,
}

#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum RosterError {
    #[display(fmt = "{} already has a player", side)]
    SideTaken { side: Side },
}

impl Player {
    pub fn new(name: impl Into<String>, side: Side) -> Self {
        Self {
            name: name.into(),
            side,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn side(&self) -> Side {
        self.side
    }
}

impl Roster {
    /// Register `name` as the player for `side`.
    pub fn create_player(&mut self, name: impl Into<String>, side: Side) -> Result<(), RosterError> {
        let slot = self.slot_mut(side);
        if slot.is_some() {
            return Err(RosterError::SideTaken { side });
        }
        *slot = Some(Player::new(name, side));
        Ok(())
    }

    /// The player registered for `side`, if any.
    pub fn player(&self, side: Side) -> Option<&Player> {
        match side {
            Side::Black => self.black.as_ref(),
            Side::White => self.white.as_ref(),
        }
    }

    /// Display name for `side`, falling back to the side's own name.
    pub fn name_of(&self, side: Side) -> String {
        self.player(side)
            .map(|player| player.name().to_string())
            .unwrap_or_else(|| side.to_string())
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Player> {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }
}
