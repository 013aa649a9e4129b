use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// The smallest table the role pool is balanced for.
pub const MIN_PLAYERS: usize = 5;

/// The largest table the role pool is balanced for.
pub const MAX_PLAYERS: usize = 7;

/// Options for setting up a game of Mafia.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct GameOptions {
    /// The number of players sharing the terminal.
    pub num_players: usize,
}

impl GameOptions {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        let opts = Self { num_players };
        opts.validate()?;
        Ok(opts)
    }

    /// Returns a `GameError` if the player count is outside the supported range.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.num_players < MIN_PLAYERS {
            Err(GameError::TooFewPlayers)
        } else if self.num_players > MAX_PLAYERS {
            Err(GameError::TooManyPlayers)
        } else {
            Ok(())
        }
    }
}
