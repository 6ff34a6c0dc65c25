//! Answers posted to questions.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::question::QuestionId;
use crate::reputation::PostKind;
use crate::user::UserName;
use crate::votable::{Tally, Votable};

/// Stable answer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AnswerId(Uuid);

impl AnswerId {
    pub(crate) fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An answer to a question.
///
/// The parent question is held by id only; the question owns the answer.
/// The acceptance bonus is credited at most once per answer, however often
/// acceptance moves away and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    id: AnswerId,
    owner: UserName,
    question: QuestionId,
    text: String,
    tally: Tally,
    accepted: bool,
    bonus_awarded: bool,
}

impl Answer {
    pub(crate) fn new(owner: UserName, question: QuestionId, text: String) -> Self {
        Self {
            id: AnswerId::random(),
            owner,
            question,
            text,
            tally: Tally::default(),
            accepted: false,
            bonus_awarded: false,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> AnswerId {
        self.id
    }

    /// The question this answer responds to.
    #[must_use]
    pub const fn question(&self) -> QuestionId {
        self.question
    }

    /// Answer body.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Whether the question's owner has accepted this answer.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub(crate) const fn set_accepted(&mut self, accepted: bool) {
        self.accepted = accepted;
    }

    /// Marks the acceptance bonus as paid, returning `false` if it already was.
    pub(crate) const fn claim_bonus(&mut self) -> bool {
        let first = !self.bonus_awarded;
        self.bonus_awarded = true;
        first
    }
}

impl Votable for Answer {
    fn kind(&self) -> PostKind {
        PostKind::Answer
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
