//! Questions and their answer threads.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::answer::{Answer, AnswerId};
use crate::reputation::PostKind;
use crate::user::UserName;
use crate::votable::{Tally, Votable};

/// Stable question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A question asked on a board.
///
/// ## Invariants
/// - `owner` never changes after creation.
/// - At most one answer is accepted, and `accepted_answer` names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    owner: UserName,
    text: String,
    tally: Tally,
    answers: Vec<Answer>,
    accepted_answer: Option<AnswerId>,
}

impl Question {
    pub(crate) fn new(owner: UserName, text: String) -> Self {
        Self {
            id: QuestionId::random(),
            owner,
            text,
            tally: Tally::default(),
            answers: Vec::new(),
            accepted_answer: None,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> QuestionId {
        self.id
    }

    /// Question body.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Answers in the order they were posted.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        self.answers.as_slice()
    }

    /// Looks up one of this question's answers.
    #[must_use]
    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.id() == id)
    }

    /// The currently accepted answer, if any.
    #[must_use]
    pub const fn accepted_answer(&self) -> Option<AnswerId> {
        self.accepted_answer
    }

    pub(crate) fn answer_mut(&mut self, id: AnswerId) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|answer| answer.id() == id)
    }

    pub(crate) fn push_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// Moves acceptance to `id`, returning the previously accepted answer.
    ///
    /// Callers must have checked that `id` belongs to this question.
    pub(crate) fn accept(&mut self, id: AnswerId) -> Option<AnswerId> {
        let previous = self.accepted_answer.replace(id);
        for answer in &mut self.answers {
            answer.set_accepted(answer.id() == id);
        }
        previous.filter(|prior| *prior != id)
    }
}

impl Votable for Question {
    fn kind(&self) -> PostKind {
        PostKind::Question
    }

    fn owner(&self) -> &UserName {
        &self.owner
    }

    fn tally(&self) -> &Tally {
        &self.tally
    }

    fn tally_mut(&mut self) -> &mut Tally {
        &mut self.tally
    }
}
