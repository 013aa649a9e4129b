use serde::{Deserialize, Serialize};

/// The two sides of the game.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum Faction {
    Mafia,
    Civilians,
}

impl ToString for Faction {
    fn to_string(&self) -> String {
        match self {
            Faction::Mafia => "Mafia",
            Faction::Civilians => "Civilians",
        }
        .to_string()
    }
}
