//! Reputation configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::reputation::{
    ACCEPTED_ANSWER, ANSWER_DOWN_VOTE, ANSWER_UP_VOTE, QUESTION_DOWN_VOTE, QUESTION_UP_VOTE,
    ReputationPolicy,
};

const DEFAULT_BOARD_NAME: &str = "Overboard";

/// Board name and reputation overrides.
///
/// Values are read from command-line flags, `OVERBOARD_*` environment
/// variables, or a configuration file. The board name defaults to
/// `Overboard`; unset deltas fall back to the standard scoring table.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "OVERBOARD")]
pub struct ReputationSettings {
    /// Name given to the board.
    #[ortho_config(default = String::from(DEFAULT_BOARD_NAME))]
    pub board_name: String,
    /// Delta per up-vote on a question.
    pub question_up_vote: Option<i64>,
    /// Delta per down-vote on a question.
    pub question_down_vote: Option<i64>,
    /// Delta per up-vote on an answer.
    pub answer_up_vote: Option<i64>,
    /// Delta per down-vote on an answer.
    pub answer_down_vote: Option<i64>,
    /// Delta when an answer is accepted.
    pub accepted_answer: Option<i64>,
}

impl ReputationSettings {
    /// Return the configured board name.
    #[must_use]
    pub fn board_name(&self) -> &str {
        self.board_name.as_str()
    }

    /// Build the reputation policy, filling gaps with the standard table.
    #[must_use]
    pub fn policy(&self) -> ReputationPolicy {
        ReputationPolicy {
            question_up_vote: self.question_up_vote.unwrap_or(QUESTION_UP_VOTE),
            question_down_vote: self.question_down_vote.unwrap_or(QUESTION_DOWN_VOTE),
            answer_up_vote: self.answer_up_vote.unwrap_or(ANSWER_UP_VOTE),
            answer_down_vote: self.answer_down_vote.unwrap_or(ANSWER_DOWN_VOTE),
            accepted_answer: self.accepted_answer.unwrap_or(ACCEPTED_ANSWER),
        }
    }
}
