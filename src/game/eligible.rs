use super::{faction::Faction, options::MAX_PLAYERS, Game};
use serde::{Deserialize, Serialize};

/// The set of players that may be chosen for the current prompt.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct EligiblePlayers {
    eligible: [bool; MAX_PLAYERS],
}

impl EligiblePlayers {
    pub fn includes(&self, player: usize) -> bool {
        self.eligible.get(player).copied().unwrap_or(false)
    }

    /// The eligible player indices, in seating order.
    pub fn indices(&self) -> Vec<usize> {
        (0..MAX_PLAYERS).filter(|i| self.eligible[*i]).collect()
    }
}

pub struct EligiblePlayersBuilder<'a> {
    game: &'a Game,
    eligible: [bool; MAX_PLAYERS],
}

impl Game {
    /// Starts from every living player.
    pub fn eligible_players(&self) -> EligiblePlayersBuilder<'_> {
        EligiblePlayersBuilder {
            game: self,
            eligible: core::array::from_fn(|i| self.players.get(i).map(|p| p.alive).unwrap_or(false)),
        }
    }
}

impl<'a> EligiblePlayersBuilder<'a> {
    /// Removes members of the mafia, who cannot be targeted by their own side.
    pub fn not_mafia(mut self) -> Self {
        for (idx, player) in self.game.players.iter().enumerate() {
            self.eligible[idx] &= player.faction() != Faction::Mafia;
        }
        self
    }

    pub fn make(self) -> EligiblePlayers {
        EligiblePlayers { eligible: self.eligible }
    }
}
