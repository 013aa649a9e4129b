use super::faction::Faction;
use crate::error::GameError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A game player.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Player {
    pub role: Role,
    pub alive: bool,
    /// Set by the doctor; only lasts until the end of the night.
    pub protected: bool,
    /// Set by the mafia; only lasts until the end of the night.
    pub marked_for_death: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Role {
    Mafia,
    Civilian,
    Doctor,
    Detective,
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Mafia => "Mafia",
            Role::Civilian => "Civilian",
            Role::Doctor => "Doctor",
            Role::Detective => "Detective",
        }
        .to_string()
    }
}

impl Role {
    pub fn faction(&self) -> Faction {
        match self {
            Role::Mafia => Faction::Mafia,
            Role::Civilian | Role::Doctor | Role::Detective => Faction::Civilians,
        }
    }
}

impl Player {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            alive: true,
            protected: false,
            marked_for_death: false,
        }
    }

    pub fn faction(&self) -> Faction {
        self.role.faction()
    }

    /// Marks the player to be killed at the end of the night. Has no effect on dead players.
    pub fn mark_for_death(&mut self) {
        self.marked_for_death |= self.alive;
    }

    /// Protects the player from tonight's kill. Has no effect on dead players.
    pub fn protect(&mut self) {
        self.protected |= self.alive;
    }

    /// Applies the night's effects, clearing the transient flags.
    /// Returns `true` iff the player died.
    pub fn resolve_night(&mut self) -> bool {
        let dies = self.alive && self.marked_for_death && !self.protected;
        if dies {
            self.alive = false;
        }
        self.protected = false;
        self.marked_for_death = false;
        dies
    }

    /// Kills the player outright, ignoring any protection.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

/// Builds the shuffled role list for a game with `num_players` players:
/// one each of mafia, detective and doctor, and civilians for everyone else.
pub fn assign_roles(num_players: usize, rng: &mut impl rand::Rng) -> Result<Vec<Role>, GameError> {
    let num_civilians = num_players.checked_sub(3).ok_or(GameError::TooFewPlayers)?;

    let mut roles = vec![Role::Mafia, Role::Detective, Role::Doctor];
    roles.extend(std::iter::repeat(Role::Civilian).take(num_civilians));
    roles.shuffle(rng);

    Ok(roles)
}
