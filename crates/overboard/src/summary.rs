//! Serialisable read model of a board.

use serde::Serialize;

use crate::answer::{Answer, AnswerId};
use crate::board::Board;
use crate::question::{Question, QuestionId};
use crate::user::{User, UserName};
use crate::votable::Votable;

/// Snapshot of a board's users and posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    /// Board name.
    pub name: String,
    /// Users in creation order.
    pub users: Vec<UserSummary>,
    /// Questions in the order they were asked.
    pub questions: Vec<QuestionSummary>,
}

/// A user's name and reputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User name.
    pub name: UserName,
    /// Current reputation.
    pub reputation: i64,
}

/// A question with its score and answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSummary {
    /// Question id.
    pub id: QuestionId,
    /// Author.
    pub owner: UserName,
    /// Body text.
    pub text: String,
    /// Net vote score.
    pub score: i64,
    /// Accepted answer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_answer: Option<AnswerId>,
    /// Answers in posting order.
    pub answers: Vec<AnswerSummary>,
}

/// An answer with its score and acceptance state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSummary {
    /// Answer id.
    pub id: AnswerId,
    /// Author.
    pub owner: UserName,
    /// Body text.
    pub text: String,
    /// Net vote score.
    pub score: i64,
    /// Whether the question's owner accepted it.
    pub accepted: bool,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            name: board.name().to_owned(),
            users: board.users().iter().map(UserSummary::from).collect(),
            questions: board.questions().iter().map(QuestionSummary::from).collect(),
        }
    }
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name().clone(),
            reputation: user.reputation(),
        }
    }
}

impl From<&Question> for QuestionSummary {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id(),
            owner: question.owner().clone(),
            text: question.text().to_owned(),
            score: question.score(),
            accepted_answer: question.accepted_answer(),
            answers: question.answers().iter().map(AnswerSummary::from).collect(),
        }
    }
}

impl From<&Answer> for AnswerSummary {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id(),
            owner: answer.owner().clone(),
            text: answer.text().to_owned(),
            score: answer.score(),
            accepted: answer.is_accepted(),
        }
    }
}
