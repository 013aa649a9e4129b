use serde::{Deserialize, Serialize};

/// The result of a completed vote.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum VoteOutcome {
    /// A single candidate received the most votes.
    Eliminated(usize),
    /// Two or more candidates share the most votes, so nobody is eliminated.
    Tie,
}

/// Tallies the votes cast during a day, keeping track of the leader as votes come in.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Votes {
    /// Number of votes received by each player.
    tally: Vec<usize>,
    /// The player who each player voted for.
    ballots: Vec<Option<usize>>,
    /// Number of votes needed before an outcome is known.
    num_voters: usize,
    leader: Option<usize>,
    max_votes: usize,
    /// Whether some candidate other than `leader` also has `max_votes`.
    tied: bool,
}

impl Votes {
    /// Creates a new `Votes` for a table of `num_players`, of whom `num_voters` may vote.
    pub fn new(num_players: usize, num_voters: usize) -> Self {
        Self {
            tally: vec![0; num_players],
            ballots: vec![None; num_players],
            num_voters,
            leader: None,
            max_votes: 0,
            tied: false,
        }
    }

    /// Returns whether the given player has cast their vote.
    pub fn has_cast(&self, voter: usize) -> bool {
        self.ballots[voter].is_some()
    }

    /// Records a vote from `voter` for `candidate`.
    pub fn vote(&mut self, voter: usize, candidate: usize) {
        self.ballots[voter] = Some(candidate);
        self.tally[candidate] += 1;

        let count = self.tally[candidate];
        match self.leader {
            Some(leader) if leader == candidate => {
                // Everyone else had at most the old maximum
                self.max_votes = count;
                self.tied = false;
            }
            Some(_) if count == self.max_votes => {
                self.tied = true;
            }
            Some(_) if count < self.max_votes => {}
            _ => {
                self.leader = Some(candidate);
                self.max_votes = count;
                self.tied = false;
            }
        }
    }

    /// Number of votes cast so far.
    pub fn num_cast(&self) -> usize {
        self.ballots.iter().filter(|b| b.is_some()).count()
    }

    /// If all votes are counted, returns the outcome, otherwise returns `None`.
    pub fn outcome(&self) -> Option<VoteOutcome> {
        if self.num_cast() < self.num_voters {
            return None;
        }
        match (self.leader, self.tied) {
            (Some(leader), false) => Some(VoteOutcome::Eliminated(leader)),
            _ => Some(VoteOutcome::Tie),
        }
    }

    /// Gets the number of votes received by each player.
    pub fn tally(&self) -> &[usize] {
        &self.tally
    }
}
