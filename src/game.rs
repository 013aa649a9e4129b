use self::eligible::EligiblePlayers;
pub use self::event::GameEvent;
pub use self::faction::Faction;
pub use self::night::NightTurn;
pub use self::options::{GameOptions, MAX_PLAYERS, MIN_PLAYERS};
use self::player::{assign_roles, Player};
pub use self::player::Role;
pub use self::prompt::{ChoosePlayerKind, Prompt};
use self::votes::Votes;
use self::win::Headcount;
pub use self::win::WinCondition;
use crate::error::GameError;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

mod eligible;
mod event;
mod faction;
mod night;
mod options;
mod player;
mod prompt;
mod votes;
mod voting;
mod win;

/// A game of Mafia.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Game {
    opts: GameOptions,
    players: Vec<Player>,
    state: GameState,
    /// The current round, counting from 1.
    round: usize,
    /// Set once the detective has uncovered a member of the mafia; never cleared.
    mafia_detected: bool,
    /// Events that have not yet been collected by the client.
    events: Vec<GameEvent>,
    seed: u64,
}

/// Represents the current phase in the game loop.
#[derive(Clone, Serialize, Deserialize, Debug)]
enum GameState {
    Night {
        turn: NightTurn,
    },
    Voting {
        /// The player whose vote is awaited.
        voter: usize,
        /// Players who may receive votes; everyone alive at the start of the day.
        eligible: EligiblePlayers,
        votes: Votes,
    },
    GameOver(WinCondition),
}

impl Game {
    /// Creates a new game of Mafia, dealing out roles using the given seed.
    pub fn new(opts: GameOptions, seed: u64) -> Result<Self, GameError> {
        opts.validate()?;

        // Generate the players and their roles
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
        let players = assign_roles(opts.num_players, &mut rng)?
            .into_iter()
            .map(Player::new)
            .collect::<Vec<_>>();

        let mut game = Game {
            opts,
            players,
            state: GameState::Night { turn: NightTurn::Mafia },
            round: 0,
            mafia_detected: false,
            events: vec![],
            seed,
        };
        game.start_round();
        Ok(game)
    }

    /// Called when the player owed the current prompt chooses `target`.
    ///
    /// A rejected choice leaves the game untouched, so the same prompt is owed again.
    pub fn choose_player(&mut self, target: usize) -> Result<(), GameError> {
        let result = match &self.state {
            GameState::Night { turn } => {
                let turn = *turn;
                self.night_action(turn, target)
            }
            GameState::Voting { .. } => self.cast_vote(target),
            GameState::GameOver(_) => return Err(GameError::InvalidAction),
        };

        if let Err(err) = result {
            if let Prompt::ChoosePlayer { kind, actor, .. } = self.prompt() {
                log::debug!("rejected {:?} target {} for player {:?}: {}", kind, target, actor, err);
                self.events.push(GameEvent::InvalidSelection { kind, actor });
            }
        }

        result
    }

    /// Takes every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns true if the game is over.
    pub fn game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    /// Gets how the game ended, if it has.
    pub fn outcome(&self) -> Option<WinCondition> {
        match self.state {
            GameState::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Gets the winning side, if the game has ended with one.
    pub fn winner(&self) -> Option<Faction> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns whether a particular player has won.
    pub fn player_has_won(&self, player: usize) -> bool {
        match (self.winner(), self.players.get(player)) {
            (Some(faction), Some(player)) => player.faction() == faction,
            _ => false,
        }
    }

    /// Gets the number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Gets the number of players in the game that are alive.
    pub fn num_players_alive(&self) -> usize {
        self.players.iter().filter(|p| p.alive).count()
    }

    pub fn role_of(&self, player: usize) -> Result<Role, GameError> {
        self.check_player_index(player)?;
        Ok(self.players[player].role)
    }

    pub fn is_alive(&self, player: usize) -> Result<bool, GameError> {
        self.check_player_index(player)?;
        Ok(self.players[player].alive)
    }

    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns true once the detective has found the mafia.
    pub fn mafia_detected(&self) -> bool {
        self.mafia_detected
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn options(&self) -> GameOptions {
        self.opts
    }

    fn start_round(&mut self) {
        self.round += 1;
        log::info!("round {} begins with {} players alive", self.round, self.num_players_alive());
        self.events.push(GameEvent::RoundStarted { round: self.round });
        self.state = GameState::Night { turn: NightTurn::Mafia };
    }

    /// Ends the game if either side has won, returning true if so.
    fn check_game_over(&mut self) -> bool {
        let headcount = Headcount::of(&self.players);
        log::debug!("headcount: {} mafia, {} others", headcount.mafia, headcount.others);
        match headcount.evaluate() {
            Some(outcome) => {
                self.finish(outcome);
                true
            }
            None => false,
        }
    }

    /// Ends the game if at most one player is left alive, returning true if so.
    fn check_last_standing(&mut self) -> bool {
        Headcount::of(&self.players).total() <= 1 && self.check_game_over()
    }

    fn finish(&mut self, outcome: WinCondition) {
        let winner = outcome.winner().map_or("nobody".to_string(), |faction| faction.to_string());
        log::info!("game over after {} rounds: {} ({} win)", self.round, outcome.to_string(), winner);
        self.events.push(GameEvent::GameOver {
            outcome,
            winner: outcome.winner(),
        });
        self.state = GameState::GameOver(outcome);
    }

    /// Returns `Ok` if the given player index is valid, and an `Err` otherwise.
    fn check_player_index(&self, player: usize) -> Result<(), GameError> {
        if player < self.num_players() {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerIndex)
        }
    }

    /// Finds the player holding the given role.
    fn find_role(&self, role: Role) -> Option<usize> {
        self.players.iter().position(|p| p.role == role)
    }
}
