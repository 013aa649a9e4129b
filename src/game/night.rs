use super::{eligible::EligiblePlayers, player::Role, Game, GameEvent, GameState};
use crate::error::GameError;
use serde::{Deserialize, Serialize};

/// Whose turn it is during the night. The turns always run in this order.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum NightTurn {
    Mafia,
    Doctor,
    Detective,
}

impl NightTurn {
    /// The role that acts on this turn.
    pub fn role(&self) -> Role {
        match self {
            NightTurn::Mafia => Role::Mafia,
            NightTurn::Doctor => Role::Doctor,
            NightTurn::Detective => Role::Detective,
        }
    }
}

impl Game {
    /// Gets the player who acts on the given night turn.
    pub(super) fn night_actor(&self, turn: NightTurn) -> Option<usize> {
        self.find_role(turn.role())
    }

    /// Determines which players may be chosen on the given night turn.
    pub(super) fn night_targets(&self, turn: NightTurn) -> EligiblePlayers {
        match turn {
            NightTurn::Mafia => self.eligible_players().not_mafia().make(),
            NightTurn::Doctor | NightTurn::Detective => self.eligible_players().make(),
        }
    }

    /// Carries out the night action for the current turn, then hands over to the next one.
    pub(super) fn night_action(&mut self, turn: NightTurn, target: usize) -> Result<(), GameError> {
        self.check_player_index(target)?;
        if !self.night_targets(turn).includes(target) {
            return Err(GameError::InvalidPlayerChoice);
        }

        match turn {
            NightTurn::Mafia => {
                self.players[target].mark_for_death();
                self.events.push(GameEvent::TargetChosen { turn, target });
                self.state = GameState::Night { turn: NightTurn::Doctor };
            }
            NightTurn::Doctor => {
                self.players[target].protect();
                self.events.push(GameEvent::TargetChosen { turn, target });
                self.state = GameState::Night { turn: NightTurn::Detective };
            }
            NightTurn::Detective => {
                let is_mafia = self.players[target].role == Role::Mafia;
                if is_mafia && !self.mafia_detected {
                    log::info!("the detective has uncovered the mafia");
                }
                self.mafia_detected |= is_mafia;
                self.events.push(GameEvent::TargetChosen { turn, target });
                self.events.push(GameEvent::Investigation { target, is_mafia });
                self.end_night();
            }
        }

        Ok(())
    }

    /// Applies the night's kill and protection to every player at once,
    /// returning the player who died, if any.
    pub(super) fn resolve_night(&mut self) -> Option<usize> {
        let killed = self
            .players
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, player)| player.resolve_night().then_some(idx))
            .collect::<Vec<_>>();
        killed.first().copied()
    }

    fn end_night(&mut self) {
        let killed = self.resolve_night();
        match killed {
            Some(player) => log::info!("player {} was killed in the night", player + 1),
            None => log::info!("nobody died in the night"),
        }
        self.events.push(GameEvent::Dawn { killed });

        // Side counts are only judged after the vote; the night can only end a game with one player left
        if !self.check_last_standing() {
            self.start_voting();
        }
    }
}
