//! Board registry: users, questions, and the answers attached to them.

use std::collections::HashMap;

use tracing::debug;

use crate::answer::{Answer, AnswerId};
use crate::error::BoardError;
use crate::member::Member;
use crate::question::{Question, QuestionId};
use crate::reputation::ReputationPolicy;
use crate::summary::BoardSummary;
use crate::user::{User, UserName};

/// A named forum board.
///
/// The board owns every user, question, and answer created through it.
/// User names are unique per board; separate boards keep separate
/// namespaces.
///
/// # Examples
///
/// ```
/// use overboard::{Board, BoardError};
///
/// let mut board = Board::new("Java Unit Testing");
/// board.create_user("questioner").expect("first registration");
///
/// let duplicate = board.create_user("questioner");
/// assert!(matches!(duplicate, Err(BoardError::DuplicateUser { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) name: String,
    pub(crate) policy: ReputationPolicy,
    pub(crate) users: Vec<User>,
    pub(crate) questions: Vec<Question>,
    pub(crate) answer_parents: HashMap<AnswerId, QuestionId>,
}

impl Board {
    /// Creates an empty board using the default reputation table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_policy(name, ReputationPolicy::default())
    }

    /// Creates an empty board with custom reputation deltas.
    #[must_use]
    pub fn with_policy(name: impl Into<String>, policy: ReputationPolicy) -> Self {
        Self {
            name: name.into(),
            policy,
            users: Vec::new(),
            questions: Vec::new(),
            answer_parents: HashMap::new(),
        }
    }

    /// Board name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Reputation deltas in force on this board.
    #[must_use]
    pub const fn policy(&self) -> &ReputationPolicy {
        &self.policy
    }

    /// Registers a new user and returns their validated name.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidUserName`] when the name fails
    /// validation, or [`BoardError::DuplicateUser`] when it is taken.
    pub fn create_user(&mut self, name: impl Into<String>) -> Result<UserName, BoardError> {
        let user_name = UserName::new(name)?;
        if self.user(&user_name).is_some() {
            return Err(BoardError::DuplicateUser {
                board: self.name.clone(),
                name: user_name,
            });
        }

        debug!(board = %self.name, user = %user_name, "user registered");
        self.users.push(User::new(user_name.clone()));
        Ok(user_name)
    }

    /// Opens an acting handle for a registered user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownUser`] when no such user exists.
    pub fn member(&mut self, name: impl AsRef<str>) -> Result<Member<'_>, BoardError> {
        let user_name = self
            .user(name.as_ref())
            .map(|user| user.name().clone())
            .ok_or_else(|| BoardError::UnknownUser {
                name: name.as_ref().to_owned(),
            })?;
        Ok(Member::new(self, user_name))
    }

    /// Looks up a user by name.
    #[must_use]
    pub fn user(&self, name: impl AsRef<str>) -> Option<&User> {
        let wanted = name.as_ref();
        self.users
            .iter()
            .find(|user| user.name().as_ref() == wanted)
    }

    /// Registered users in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        self.users.as_slice()
    }

    /// Looks up a question by id.
    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Questions in the order they were asked.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        self.questions.as_slice()
    }

    /// Looks up an answer by id across all questions.
    #[must_use]
    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        let parent = self.answer_parents.get(&id)?;
        self.question(*parent)?.answer(id)
    }

    /// Serialisable snapshot of users, questions, and answers.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        BoardSummary::from(self)
    }
}

pub(crate) fn find_user_mut<'a>(
    users: &'a mut [User],
    name: &UserName,
) -> Result<&'a mut User, BoardError> {
    users
        .iter_mut()
        .find(|user| user.name() == name)
        .ok_or_else(|| BoardError::UnknownUser {
            name: name.to_string(),
        })
}

pub(crate) fn find_question_mut(
    questions: &mut [Question],
    id: QuestionId,
) -> Result<&mut Question, BoardError> {
    questions
        .iter_mut()
        .find(|question| question.id() == id)
        .ok_or(BoardError::UnknownQuestion { id })
}

#[cfg(test)]
mod tests;
