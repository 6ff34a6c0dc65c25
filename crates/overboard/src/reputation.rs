//! Reputation scoring rules.
//!
//! Deltas are always credited to the author of the post being voted on or
//! accepted, never to the acting user.

use std::fmt;

use serde::Serialize;

/// Reputation gained by a question's author per up-vote.
pub const QUESTION_UP_VOTE: i64 = 5;
/// Reputation change for a question's author per down-vote.
pub const QUESTION_DOWN_VOTE: i64 = -1;
/// Reputation gained by an answer's author per up-vote.
pub const ANSWER_UP_VOTE: i64 = 10;
/// Reputation change for an answer's author per down-vote.
pub const ANSWER_DOWN_VOTE: i64 = -1;
/// Reputation gained by an answer's author when the answer is accepted.
pub const ACCEPTED_ANSWER: i64 = 15;

/// The two kinds of post that can receive votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    /// A question asked on a board.
    Question,
    /// An answer to a question.
    Answer,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question => f.write_str("question"),
            Self::Answer => f.write_str("answer"),
        }
    }
}

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    /// Approval.
    Up,
    /// Disapproval.
    Down,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

/// Reputation deltas applied for each scoring event.
///
/// # Examples
///
/// ```
/// use overboard::{PostKind, ReputationPolicy, VoteDirection};
///
/// let policy = ReputationPolicy::default();
/// assert_eq!(policy.vote_delta(PostKind::Answer, VoteDirection::Up), 10);
/// assert_eq!(policy.acceptance_bonus(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationPolicy {
    /// Delta per up-vote on a question.
    pub question_up_vote: i64,
    /// Delta per down-vote on a question.
    pub question_down_vote: i64,
    /// Delta per up-vote on an answer.
    pub answer_up_vote: i64,
    /// Delta per down-vote on an answer.
    pub answer_down_vote: i64,
    /// Delta when an answer is accepted.
    pub accepted_answer: i64,
}

impl ReputationPolicy {
    /// Returns the delta credited to a post's author for one vote.
    #[must_use]
    pub const fn vote_delta(&self, kind: PostKind, direction: VoteDirection) -> i64 {
        match (kind, direction) {
            (PostKind::Question, VoteDirection::Up) => self.question_up_vote,
            (PostKind::Question, VoteDirection::Down) => self.question_down_vote,
            (PostKind::Answer, VoteDirection::Up) => self.answer_up_vote,
            (PostKind::Answer, VoteDirection::Down) => self.answer_down_vote,
        }
    }

    /// Returns the delta credited to an answer's author on acceptance.
    #[must_use]
    pub const fn acceptance_bonus(&self) -> i64 {
        self.accepted_answer
    }
}

impl Default for ReputationPolicy {
    fn default() -> Self {
        Self {
            question_up_vote: QUESTION_UP_VOTE,
            question_down_vote: QUESTION_DOWN_VOTE,
            answer_up_vote: ANSWER_UP_VOTE,
            answer_down_vote: ANSWER_DOWN_VOTE,
            accepted_answer: ACCEPTED_ANSWER,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::question_up(PostKind::Question, VoteDirection::Up, 5)]
    #[case::question_down(PostKind::Question, VoteDirection::Down, -1)]
    #[case::answer_up(PostKind::Answer, VoteDirection::Up, 10)]
    #[case::answer_down(PostKind::Answer, VoteDirection::Down, -1)]
    fn default_policy_matches_scoring_table(
        #[case] kind: PostKind,
        #[case] direction: VoteDirection,
        #[case] expected: i64,
    ) {
        assert_eq!(
            ReputationPolicy::default().vote_delta(kind, direction),
            expected
        );
    }

    #[test]
    fn default_acceptance_bonus_is_fifteen() {
        assert_eq!(ReputationPolicy::default().acceptance_bonus(), 15);
    }

    #[test]
    fn custom_policy_dispatches_per_kind() {
        let policy = ReputationPolicy {
            question_up_vote: 1,
            question_down_vote: -2,
            answer_up_vote: 3,
            answer_down_vote: -4,
            accepted_answer: 5,
        };

        assert_eq!(policy.vote_delta(PostKind::Question, VoteDirection::Down), -2);
        assert_eq!(policy.vote_delta(PostKind::Answer, VoteDirection::Down), -4);
        assert_eq!(policy.acceptance_bonus(), 5);
    }

    #[test]
    fn policy_serialises_with_camel_case_keys() {
        let value = serde_json::to_value(ReputationPolicy::default()).expect("serialise policy");
        assert_eq!(
            value.get("answerUpVote").and_then(serde_json::Value::as_i64),
            Some(10)
        );
        assert!(value.get("answer_up_vote").is_none());
    }
}
