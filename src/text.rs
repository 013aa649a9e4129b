//! Player-facing text for the console, in each supported language.

use crate::game::{ChoosePlayerKind, Faction, NightTurn, Role, WinCondition, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "ru" | "russian" => Some(Language::Russian),
            _ => None,
        }
    }
}

/// Builds the lines the console prints. Players are numbered from 1.
#[derive(Clone, Copy, Debug)]
pub struct Text {
    lang: Language,
}

impl Text {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn ask_player_count(&self) -> String {
        match self.lang {
            Language::English => format!("Enter the number of players ({} to {}): ", MIN_PLAYERS, MAX_PLAYERS),
            Language::Russian => format!("Введите количество игроков (от {} до {}): ", MIN_PLAYERS, MAX_PLAYERS),
        }
    }

    pub fn invalid_player_count(&self) -> String {
        match self.lang {
            Language::English => "That is not a valid number of players, try again.".into(),
            Language::Russian => "Неправильное количество игроков! Попробуйте еще раз.".into(),
        }
    }

    pub fn your_role(&self, role: Role) -> String {
        let role = self.role(role);
        match self.lang {
            Language::English => format!("Player 1, you are the {}!", role),
            Language::Russian => format!("Игрок 1, ваша роль: {}!", role),
        }
    }

    pub fn role(&self, role: Role) -> &'static str {
        match (self.lang, role) {
            (Language::English, Role::Mafia) => "mafia",
            (Language::English, Role::Civilian) => "civilian",
            (Language::English, Role::Doctor) => "doctor",
            (Language::English, Role::Detective) => "detective",
            (Language::Russian, Role::Mafia) => "мафия",
            (Language::Russian, Role::Civilian) => "мирный житель",
            (Language::Russian, Role::Doctor) => "доктор",
            (Language::Russian, Role::Detective) => "детектив",
        }
    }

    pub fn round_started(&self, round: usize) -> String {
        match self.lang {
            Language::English => format!("--- Round {} --- Night falls over the town.", round),
            Language::Russian => format!("--- Раунд {} --- Город засыпает.", round),
        }
    }

    /// Announces that a new kind of choice is about to be made.
    pub fn wakes_up(&self, kind: ChoosePlayerKind) -> String {
        match (self.lang, kind) {
            (Language::English, ChoosePlayerKind::Kill) => "The mafia wakes up...".into(),
            (Language::English, ChoosePlayerKind::Protect) => "The doctor wakes up...".into(),
            (Language::English, ChoosePlayerKind::Investigate) => "The detective wakes up...".into(),
            (Language::English, ChoosePlayerKind::Vote) => "The town gathers to vote...".into(),
            (Language::Russian, ChoosePlayerKind::Kill) => "Мафия просыпается...".into(),
            (Language::Russian, ChoosePlayerKind::Protect) => "Доктор просыпается...".into(),
            (Language::Russian, ChoosePlayerKind::Investigate) => "Детектив просыпается...".into(),
            (Language::Russian, ChoosePlayerKind::Vote) => "Голосование...".into(),
        }
    }

    /// Asks for a choice, listing the valid player numbers.
    pub fn choose_target(&self, kind: ChoosePlayerKind, actor: Option<usize>, options: &[usize]) -> String {
        let options = options.iter().map(|i| (i + 1).to_string()).collect::<Vec<_>>().join(", ");
        match (self.lang, kind) {
            (Language::English, ChoosePlayerKind::Kill) => format!("Choose a player to kill [{}]: ", options),
            (Language::English, ChoosePlayerKind::Protect) => format!("Choose a player to heal [{}]: ", options),
            (Language::English, ChoosePlayerKind::Investigate) => {
                format!("Choose a player to investigate [{}]: ", options)
            }
            (Language::English, ChoosePlayerKind::Vote) => format!(
                "Player {}, choose a player to vote for [{}]: ",
                actor.map(|a| a + 1).unwrap_or_default(),
                options
            ),
            (Language::Russian, ChoosePlayerKind::Kill) => {
                format!("Выберите номер игрока для убийства [{}]: ", options)
            }
            (Language::Russian, ChoosePlayerKind::Protect) => {
                format!("Выберите номер игрока для лечения [{}]: ", options)
            }
            (Language::Russian, ChoosePlayerKind::Investigate) => {
                format!("Выберите номер игрока для расследования [{}]: ", options)
            }
            (Language::Russian, ChoosePlayerKind::Vote) => format!(
                "Игрок {}, выберите номер игрока для голосования [{}]: ",
                actor.map(|a| a + 1).unwrap_or_default(),
                options
            ),
        }
    }

    pub fn invalid_selection(&self) -> String {
        match self.lang {
            Language::English => "Invalid choice, try again.".into(),
            Language::Russian => "Неверный выбор, повторите еще раз.".into(),
        }
    }

    /// Confirms a night action, and sends the actor back to sleep.
    pub fn target_chosen(&self, turn: NightTurn, target: usize) -> String {
        let n = target + 1;
        match (self.lang, turn) {
            (Language::English, NightTurn::Mafia) => {
                format!("The mafia chooses player {} to kill.\nThe mafia falls asleep...", n)
            }
            (Language::English, NightTurn::Doctor) => {
                format!("The doctor chooses player {} to heal.\nThe doctor falls asleep...", n)
            }
            (Language::English, NightTurn::Detective) => {
                format!("The detective chooses player {} to investigate.", n)
            }
            (Language::Russian, NightTurn::Mafia) => {
                format!("Мафия выбирает игрока {} для убийства.\nМафия засыпает...", n)
            }
            (Language::Russian, NightTurn::Doctor) => {
                format!("Доктор выбирает игрока {} для лечения.\nДоктор засыпает...", n)
            }
            (Language::Russian, NightTurn::Detective) => {
                format!("Детектив выбирает игрока {} для расследования.", n)
            }
        }
    }

    pub fn investigation(&self, target: usize, is_mafia: bool) -> String {
        let n = target + 1;
        match (self.lang, is_mafia) {
            (Language::English, true) => format!("Player {} is in the mafia!\nThe detective falls asleep...", n),
            (Language::English, false) => {
                format!("Player {} is not in the mafia.\nThe detective falls asleep...", n)
            }
            (Language::Russian, true) => format!("Роль игрока {}: Мафия\nДетектив засыпает...", n),
            (Language::Russian, false) => format!("Роль игрока {}: Мирный житель\nДетектив засыпает...", n),
        }
    }

    pub fn dawn(&self, killed: Option<usize>) -> String {
        match (self.lang, killed) {
            (Language::English, Some(player)) => format!("The town wakes up. Player {} was killed in the night.", player + 1),
            (Language::English, None) => "The town wakes up. Nobody died in the night.".into(),
            (Language::Russian, Some(player)) => format!("Город просыпается. Ночью был убит игрок {}.", player + 1),
            (Language::Russian, None) => "Город просыпается. Этой ночью никто не погиб.".into(),
        }
    }

    pub fn vote_tied(&self) -> String {
        match self.lang {
            Language::English => "The vote is tied; nobody is eliminated.".into(),
            Language::Russian => "Ничья в голосовании, никто не будет убит.".into(),
        }
    }

    pub fn eliminated(&self, player: usize, votes: usize) -> String {
        match self.lang {
            Language::English => format!("Player {} receives the most votes ({}) and is eliminated.", player + 1, votes),
            Language::Russian => format!(
                "Игрок {} получает наибольшее количество голосов ({}) и будет убит.",
                player + 1,
                votes
            ),
        }
    }

    pub fn game_over(&self, outcome: WinCondition) -> String {
        let reason = match (self.lang, outcome) {
            (Language::English, WinCondition::ExposedMafiaVotedOut) => "The player was the exposed mafia! ",
            (Language::Russian, WinCondition::ExposedMafiaVotedOut) => "Игрок оказался мафией! ",
            _ => "",
        };
        let result = match (self.lang, outcome.winner()) {
            (Language::English, Some(Faction::Civilians)) => "The civilians win!",
            (Language::English, Some(Faction::Mafia)) => "The mafia wins!",
            (Language::English, None) => "Nobody survived. The game is a draw.",
            (Language::Russian, Some(Faction::Civilians)) => "Победили мирные жители!",
            (Language::Russian, Some(Faction::Mafia)) => "Победила мафия!",
            (Language::Russian, None) => "Никто не выжил. Ничья.",
        };
        format!("{}{}", reason, result)
    }
}
