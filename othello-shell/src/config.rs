use std::path::Path;
use std::str::FromStr;

use derive_more::{Display, Error, From};
use othello_engine::{Location, Side};
use serde::{Deserialize, Serialize};

use crate::player::Roster;

/// Errors that can occur when loading configuration.
#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display(fmt = "failed to read config file {}: {}", path, source)]
    #[from(ignore)]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[display(fmt = "failed to parse TOML: {}", _0)]
    TomlParse(toml::de::Error),

    #[display(fmt = "config validation error: {}", reason)]
    #[from(ignore)]
    Validation { reason: String },
}

/// A player registration as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub name: String,
    pub side: String,
}

/// One scripted move: `side` places a piece `at` a location in "E3" notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub side: String,
    pub at: String,
}

/// Shell configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub players: Vec<PlayerEntry>,
    pub script: Vec<ScriptStep>,
    /// Print the board to stderr after every accepted move.
    pub verbose: bool,
}

const DEMO_PLAYERS: [(&str, &str); 2] = [("VERSTUYFT", "white"), ("HASSAN", "black")];

const DEMO_SCRIPT: [(&str, &str); 18] = [
    ("black", "E3"),
    ("white", "D3"),
    ("black", "C4"),
    ("white", "B3"),
    ("black", "C3"),
    ("white", "F5"),
    ("black", "A3"),
    ("white", "C2"),
    ("black", "F4"),
    ("white", "F3"),
    ("black", "D2"),
    ("white", "D1"),
    ("black", "G3"),
    ("white", "A4"),
    ("black", "A5"),
    ("white", "H3"),
    ("black", "A8"),
    ("white", "B7"),
];

impl Default for ShellConfig {
    /// The built-in demo game.
    fn default() -> Self {
        ShellConfig {
            players: DEMO_PLAYERS
                .iter()
                .map(|&(name, side)| PlayerEntry {
                    name: name.to_string(),
                    side: side.to_string(),
                })
                .collect(),
            script: DEMO_SCRIPT
                .iter()
                .map(|&(side, at)| ScriptStep {
                    side: side.to_string(),
                    at: at.to_string(),
                })
                .collect(),
            verbose: false,
        }
    }
}

impl ShellConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: ShellConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to the built-in demo if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using the built-in demo",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Check that the players and script are well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let roster = self.roster()?;
        for side in [Side::Black, Side::White] {
            if roster.player(side).is_none() {
                return Err(validation(format!("no player registered for {}", side)));
            }
        }
        self.script_moves()?;
        Ok(())
    }

    /// Build the roster from the configured players.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        let mut roster = Roster::default();
        for entry in &self.players {
            let side = parse_side(&entry.side)?;
            roster
                .create_player(entry.name.clone(), side)
                .map_err(|e| validation(e.to_string()))?;
        }
        Ok(roster)
    }

    /// Parse the scripted moves.
    pub fn script_moves(&self) -> Result<Vec<(Side, Location)>, ConfigError> {
        self.script
            .iter()
            .map(|step| {
                let side = parse_side(&step.side)?;
                let location = Location::from_str(&step.at)
                    .map_err(|_| validation(format!("invalid location '{}'", step.at)))?;
                Ok((side, location))
            })
            .collect()
    }
}

fn parse_side(side: &str) -> Result<Side, ConfigError> {
    side.parse()
        .map_err(|_| validation(format!("invalid side '{}'", side)))
}

fn validation(reason: String) -> ConfigError {
    ConfigError::Validation { reason }
}
