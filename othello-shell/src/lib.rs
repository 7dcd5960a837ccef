//! A text shell around `othello-engine`: named players, scripted demos, and
//! interactive games. Everything here goes through the engine's public API.

pub mod config;
pub mod play;
pub mod player;
pub mod session;

pub use config::{ConfigError, ShellConfig};
pub use player::{Player, Roster, RosterError};
pub use session::{Report, Session, Verdict};
