//! Shared vote bookkeeping for questions and answers.

use std::collections::BTreeSet;
use std::fmt;

use crate::answer::AnswerId;
use crate::question::QuestionId;
use crate::reputation::{PostKind, VoteDirection};
use crate::user::UserName;

/// Identifies any post that can be voted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostId {
    /// A question on the board.
    Question(QuestionId),
    /// An answer to one of the board's questions.
    Answer(AnswerId),
}

impl From<QuestionId> for PostId {
    fn from(value: QuestionId) -> Self {
        Self::Question(value)
    }
}

impl From<AnswerId> for PostId {
    fn from(value: AnswerId) -> Self {
        Self::Answer(value)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question(id) => write!(f, "question {id}"),
            Self::Answer(id) => write!(f, "answer {id}"),
        }
    }
}

/// Score and voter record for a single post.
///
/// Each voter counts at most once per direction. Up and down votes are
/// recorded independently, so a voter who later votes the other way adds a
/// second event rather than replacing the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    score: i64,
    up_voters: BTreeSet<UserName>,
    down_voters: BTreeSet<UserName>,
}

impl Tally {
    /// Net score: up-votes minus down-votes.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Users who up-voted the post.
    pub fn up_voters(&self) -> impl Iterator<Item = &UserName> {
        self.up_voters.iter()
    }

    /// Users who down-voted the post.
    pub fn down_voters(&self) -> impl Iterator<Item = &UserName> {
        self.down_voters.iter()
    }

    /// Number of recorded up-votes.
    #[must_use]
    pub fn up_votes(&self) -> usize {
        self.up_voters.len()
    }

    /// Number of recorded down-votes.
    #[must_use]
    pub fn down_votes(&self) -> usize {
        self.down_voters.len()
    }

    /// Whether `voter` has already cast a vote in `direction`.
    #[must_use]
    pub fn has_voted(&self, voter: &UserName, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Up => self.up_voters.contains(voter),
            VoteDirection::Down => self.down_voters.contains(voter),
        }
    }

    /// Records a vote, returning `false` when it is a repeat.
    pub fn record(&mut self, voter: &UserName, direction: VoteDirection) -> bool {
        let (voters, step) = match direction {
            VoteDirection::Up => (&mut self.up_voters, 1),
            VoteDirection::Down => (&mut self.down_voters, -1),
        };
        if !voters.insert(voter.clone()) {
            return false;
        }
        self.score = self.score.saturating_add(step);
        true
    }
}

/// A post that accrues votes and a score.
///
/// Implementors only expose their owner, kind, and [`Tally`]; the vote
/// bookkeeping itself is shared.
pub trait Votable {
    /// Kind of post, used to look up reputation deltas.
    fn kind(&self) -> PostKind;

    /// Author of the post.
    fn owner(&self) -> &UserName;

    /// Vote record for the post.
    fn tally(&self) -> &Tally;

    /// Mutable vote record for the post.
    fn tally_mut(&mut self) -> &mut Tally;

    /// Net score of the post.
    fn score(&self) -> i64 {
        self.tally().score()
    }

    /// Number of distinct up-votes received.
    fn up_votes(&self) -> usize {
        self.tally().up_votes()
    }

    /// Number of distinct down-votes received.
    fn down_votes(&self) -> usize {
        self.tally().down_votes()
    }

    /// Records an up-vote by `voter`; `false` means it was a repeat.
    fn up_vote(&mut self, voter: &UserName) -> bool {
        self.tally_mut().record(voter, VoteDirection::Up)
    }

    /// Records a down-vote by `voter`; `false` means it was a repeat.
    fn down_vote(&mut self, voter: &UserName) -> bool {
        self.tally_mut().record(voter, VoteDirection::Down)
    }

    /// Records a vote in either direction.
    fn vote(&mut self, voter: &UserName, direction: VoteDirection) -> bool {
        match direction {
            VoteDirection::Up => self.up_vote(voter),
            VoteDirection::Down => self.down_vote(voter),
        }
    }

    /// Whether `user` authored this post.
    fn is_owned_by(&self, user: &UserName) -> bool {
        self.owner() == user
    }
}
