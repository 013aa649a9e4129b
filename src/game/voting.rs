use super::{
    player::Role,
    votes::{VoteOutcome, Votes},
    win::WinCondition,
    Game, GameEvent, GameState,
};
use crate::error::GameError;

impl Game {
    /// Opens the day's vote, starting with the first living player.
    pub(super) fn start_voting(&mut self) {
        let eligible = self.eligible_players().make();
        let votes = Votes::new(self.num_players(), self.num_players_alive());
        let Some(voter) = self.next_voter(&votes) else {
            // Only reachable with nobody alive, which the headcount check has already ruled out
            self.start_round();
            return;
        };
        self.state = GameState::Voting { voter, eligible, votes };
    }

    /// Called when the current voter casts their vote.
    pub(super) fn cast_vote(&mut self, candidate: usize) -> Result<(), GameError> {
        self.check_player_index(candidate)?;

        let GameState::Voting { voter, eligible, votes } = &mut self.state else {
            return Err(GameError::InvalidAction);
        };
        if !eligible.includes(candidate) {
            return Err(GameError::InvalidPlayerChoice);
        }

        let voter = *voter;
        votes.vote(voter, candidate);
        let outcome = votes.outcome();
        let received = match outcome {
            Some(VoteOutcome::Eliminated(player)) => votes.tally()[player],
            _ => 0,
        };
        self.events.push(GameEvent::VoteCast { voter, candidate });

        match outcome {
            Some(outcome) => self.end_voting(outcome, received),
            None => self.advance_voter(),
        }

        Ok(())
    }

    /// Finds the next living player who is yet to vote.
    fn next_voter(&self, votes: &Votes) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .find(|(idx, player)| player.alive && !votes.has_cast(*idx))
            .map(|(idx, _)| idx)
    }

    fn advance_voter(&mut self) {
        let GameState::Voting { votes, .. } = &self.state else {
            return;
        };
        let next = self.next_voter(votes);
        if let (Some(next), GameState::Voting { voter, .. }) = (next, &mut self.state) {
            *voter = next;
        }
    }

    fn end_voting(&mut self, outcome: VoteOutcome, received: usize) {
        match outcome {
            VoteOutcome::Tie => {
                log::info!("the vote was tied; nobody is eliminated");
                self.events.push(GameEvent::VoteTied);
            }
            VoteOutcome::Eliminated(player) => {
                log::info!("player {} was voted out with {} votes", player + 1, received);
                self.events.push(GameEvent::PlayerEliminated { player, votes: received });

                // An exposed mafia member ends the game outright, whatever the headcount
                let exposed = self.players[player].role == Role::Mafia && self.mafia_detected;
                self.players[player].kill();
                if exposed {
                    self.finish(WinCondition::ExposedMafiaVotedOut);
                    return;
                }
            }
        }

        if !self.check_game_over() {
            self.start_round();
        }
    }
}
