use super::faction::Faction;
use super::player::Player;
use serde::{Deserialize, Serialize};

/// How a game came to an end.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum WinCondition {
    /// Every member of the mafia is dead.
    MafiaEliminated,
    /// A mafia member who the detective had exposed was voted out.
    ExposedMafiaVotedOut,
    /// The mafia equal or outnumber everyone else.
    MafiaMajority,
    /// Only three players are left, and the mafia is one of them.
    FinalThree,
    /// A single player is left standing, and their side takes the game.
    LastSurvivor(Faction),
    /// Nobody is left alive; the game is drawn.
    NoSurvivors,
}

impl ToString for WinCondition {
    fn to_string(&self) -> String {
        match self {
            WinCondition::MafiaEliminated => "MafiaEliminated",
            WinCondition::ExposedMafiaVotedOut => "ExposedMafiaVotedOut",
            WinCondition::MafiaMajority => "MafiaMajority",
            WinCondition::FinalThree => "FinalThree",
            WinCondition::LastSurvivor(_) => "LastSurvivor",
            WinCondition::NoSurvivors => "NoSurvivors",
        }
        .to_string()
    }
}

impl WinCondition {
    /// The winning side, or `None` for a draw.
    pub fn winner(&self) -> Option<Faction> {
        match self {
            WinCondition::MafiaEliminated | WinCondition::ExposedMafiaVotedOut => Some(Faction::Civilians),
            WinCondition::MafiaMajority | WinCondition::FinalThree => Some(Faction::Mafia),
            WinCondition::LastSurvivor(faction) => Some(*faction),
            WinCondition::NoSurvivors => None,
        }
    }
}

/// Living player counts on each side.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Headcount {
    pub mafia: usize,
    pub others: usize,
}

impl Headcount {
    pub fn of(players: &[Player]) -> Self {
        let alive = players.iter().filter(|p| p.alive);
        let mafia = alive.clone().filter(|p| p.faction() == Faction::Mafia).count();
        let others = alive.count() - mafia;
        Self { mafia, others }
    }

    pub fn total(&self) -> usize {
        self.mafia + self.others
    }

    /// Decides whether the game is over, checking each rule in priority order.
    pub fn evaluate(&self) -> Option<WinCondition> {
        let Headcount { mafia, others } = *self;

        if self.total() == 0 {
            return Some(WinCondition::NoSurvivors);
        }
        if self.total() == 1 {
            let faction = if mafia == 1 { Faction::Mafia } else { Faction::Civilians };
            return Some(WinCondition::LastSurvivor(faction));
        }
        if mafia == 0 {
            return Some(WinCondition::MafiaEliminated);
        }
        if mafia >= others {
            return Some(WinCondition::MafiaMajority);
        }
        if self.total() == 3 {
            return Some(WinCondition::FinalThree);
        }
        None
    }
}
