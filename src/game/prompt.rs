use super::{faction::Faction, night::NightTurn, win::WinCondition, Game, GameState};
use serde::{Deserialize, Serialize};

/// What the game is currently waiting for.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(tag = "type")]
pub enum Prompt {
    /// A player must choose another player.
    ChoosePlayer {
        kind: ChoosePlayerKind,
        /// The player who is choosing, if they hold a seat at the table.
        actor: Option<usize>,
        /// The players who may be chosen.
        options: Vec<usize>,
    },
    GameOver {
        outcome: WinCondition,
        winner: Option<Faction>,
    },
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ChoosePlayerKind {
    /// The mafia is choosing who to kill tonight
    Kill,
    /// The doctor is choosing who to protect tonight
    Protect,
    /// The detective is choosing who to investigate
    Investigate,
    /// A player is voting on who to eliminate
    Vote,
}

impl Game {
    /// Gets the prompt owed to the players in the current state.
    pub fn prompt(&self) -> Prompt {
        match &self.state {
            GameState::Night { turn } => {
                let kind = match turn {
                    NightTurn::Mafia => ChoosePlayerKind::Kill,
                    NightTurn::Doctor => ChoosePlayerKind::Protect,
                    NightTurn::Detective => ChoosePlayerKind::Investigate,
                };
                Prompt::ChoosePlayer {
                    kind,
                    actor: self.night_actor(*turn),
                    options: self.night_targets(*turn).indices(),
                }
            }
            GameState::Voting { voter, eligible, .. } => Prompt::ChoosePlayer {
                kind: ChoosePlayerKind::Vote,
                actor: Some(*voter),
                options: eligible.indices(),
            },
            GameState::GameOver(outcome) => Prompt::GameOver {
                outcome: *outcome,
                winner: outcome.winner(),
            },
        }
    }
}
