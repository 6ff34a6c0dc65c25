//! Board users and their reputation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::answer::AnswerId;
use crate::question::QuestionId;

/// Maximum allowed length for a user name, in characters.
pub const USER_NAME_MAX: usize = 64;

/// Validation errors returned by [`UserName::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    /// The name is empty or only whitespace.
    #[error("user name must not be empty")]
    Empty,
    /// The name has leading or trailing whitespace.
    #[error("user name must not start or end with whitespace")]
    SurroundingWhitespace,
    /// The name exceeds [`USER_NAME_MAX`] characters.
    #[error("user name must be at most {max} characters")]
    TooLong {
        /// Maximum permitted length.
        max: usize,
    },
}

/// Unique, immutable user name within a board.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    ///
    /// # Examples
    ///
    /// ```
    /// use overboard::{UserName, UserNameError};
    ///
    /// assert!(UserName::new("questioner").is_ok());
    /// assert_eq!(UserName::new("  "), Err(UserNameError::Empty));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserNameError> {
        Self::from_owned(name.into())
    }

    fn from_owned(name: String) -> Result<Self, UserNameError> {
        if name.trim().is_empty() {
            return Err(UserNameError::Empty);
        }
        if name.trim() != name {
            return Err(UserNameError::SurroundingWhitespace);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// A registered board user.
///
/// ## Invariants
/// - `reputation` starts at zero and only changes when other users vote on
///   or accept this user's posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: UserName,
    reputation: i64,
    questions: Vec<QuestionId>,
    answers: Vec<AnswerId>,
}

impl User {
    pub(crate) const fn new(name: UserName) -> Self {
        Self {
            name,
            reputation: 0,
            questions: Vec::new(),
            answers: Vec::new(),
        }
    }

    /// The user's unique name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Current reputation.
    #[must_use]
    pub const fn reputation(&self) -> i64 {
        self.reputation
    }

    /// Questions this user has asked, oldest first.
    #[must_use]
    pub fn questions(&self) -> &[QuestionId] {
        self.questions.as_slice()
    }

    /// Answers this user has posted, oldest first.
    #[must_use]
    pub fn answers(&self) -> &[AnswerId] {
        self.answers.as_slice()
    }

    pub(crate) const fn adjust_reputation(&mut self, delta: i64) {
        self.reputation = self.reputation.saturating_add(delta);
    }

    pub(crate) fn record_question(&mut self, id: QuestionId) {
        self.questions.push(id);
    }

    pub(crate) fn record_answer(&mut self, id: AnswerId) {
        self.answers.push(id);
    }
}

#[cfg(test)]
mod tests;
