use super::{faction::Faction, night::NightTurn, prompt::ChoosePlayerKind, win::WinCondition};
use serde::{Deserialize, Serialize};

/// Something that happened in the game which should be shown to the players.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Night has fallen on a new round.
    RoundStarted { round: usize },
    /// A choice was rejected and must be made again.
    InvalidSelection { kind: ChoosePlayerKind, actor: Option<usize> },
    /// A night action was carried out on a player.
    TargetChosen { turn: NightTurn, target: usize },
    /// The detective learned whether a player is in the mafia.
    Investigation { target: usize, is_mafia: bool },
    /// The night is over; `killed` is the player who died, if any.
    Dawn { killed: Option<usize> },
    VoteCast { voter: usize, candidate: usize },
    /// The vote ended on a tie, so nobody was eliminated.
    VoteTied,
    PlayerEliminated { player: usize, votes: usize },
    GameOver {
        outcome: WinCondition,
        winner: Option<Faction>,
    },
}
