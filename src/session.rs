use crate::error::GameError;
use crate::game::{Game, GameEvent, GameOptions};
use anyhow::Context;
use chrono::prelude::{DateTime, Utc};
use serde_json::{json, Value};
use std::path::Path;
use std::time::SystemTime;

/// A single game, from the deal to the final announcement.
pub struct Session {
    /// The game itself.
    game: Game,
    /// Timestamp that the game was created.
    started_ts: SystemTime,
    /// Every event the game has produced, in order.
    transcript: Vec<GameEvent>,
    /// Whether this game has been archived.
    archived: bool,
}

impl Session {
    /// Starts a new game.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let game = Game::new(options, seed)?;
        log::info!("dealt a {}-player game with seed {}", game.num_players(), seed);
        Ok(Self {
            game,
            started_ts: SystemTime::now(),
            transcript: vec![],
            archived: false,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Makes a choice on behalf of the player owed the current prompt.
    pub fn choose_player(&mut self, target: usize) -> Result<(), GameError> {
        self.game.choose_player(target)
    }

    /// Collects the game's new events, keeping a copy for the transcript.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        let events = self.game.drain_events();
        self.transcript.extend(events.iter().cloned());
        events
    }

    /// Gets the record of the game so far.
    pub fn transcript_json(&self) -> Value {
        let game = &self.game;
        let players = (0..game.num_players())
            .map(|idx| {
                json!({
                    "seat": idx + 1,
                    "role": game.role_of(idx).ok().map(|role| role.to_string()),
                    "alive": game.is_alive(idx).unwrap_or(false),
                    "won": game.player_has_won(idx),
                })
            })
            .collect::<Value>();

        json!({
            "seed": game.seed(),
            "num_players": game.options().num_players,
            "rounds": game.round(),
            "mafia_detected": game.mafia_detected(),
            "started": iso8601(self.started_ts),
            "finished": iso8601(SystemTime::now()),
            "players": players,
            "events": self.transcript,
            "outcome": game.outcome(),
            "winner": game.winner(),
        })
    }

    /// Writes the transcript to `path` once the game is over; does nothing otherwise.
    pub fn archive(&mut self, path: &Path) -> anyhow::Result<()> {
        if !self.game.game_over() || self.archived {
            return Ok(());
        }
        // Make sure nothing the client hasn't collected yet is missing
        self.drain_events();

        let data = serde_json::to_string_pretty(&self.transcript_json())?;
        std::fs::write(path, data).with_context(|| format!("could not write transcript to {}", path.display()))?;
        self.archived = true;
        log::info!("wrote transcript to {}", path.display());
        Ok(())
    }
}

fn iso8601(st: SystemTime) -> String {
    let dt: DateTime<Utc> = st.into();
    dt.format("%+").to_string()
}
