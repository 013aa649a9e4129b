use thiserror::Error;

/// The result of attempting to perform an invalid operation on a [Game](crate::game::Game).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("too few players in the game")]
    TooFewPlayers,
    #[error("too many players in the game")]
    TooManyPlayers,
    #[error("this player cannot be chosen for this action")]
    InvalidPlayerChoice,
    #[error("invalid player index")]
    InvalidPlayerIndex,
    #[error("this action cannot be performed during this phase of the game")]
    InvalidAction,
}

impl GameError {
    /// Returns `true` if the error came from a bad selection, which the player may simply retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GameError::InvalidPlayerChoice | GameError::InvalidPlayerIndex)
    }
}
