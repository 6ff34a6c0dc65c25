//! Error types for board operations.
//!
//! [`VotingError`] and [`AcceptanceError`] describe rule violations by the
//! acting user. [`BoardError`] adds registry lookups and input validation,
//! and wraps the rule violations without altering their messages.

use thiserror::Error;

use crate::answer::AnswerId;
use crate::question::QuestionId;
use crate::user::{UserName, UserNameError};

/// A vote was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VotingError {
    /// The voter authored the post.
    #[error("You cannot vote for yourself!")]
    SelfVote,
}

/// An answer acceptance was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptanceError {
    /// Only the question's owner may accept its answers.
    #[error("Only {owner} can accept this answer as it is their question")]
    NotQuestionOwner {
        /// Owner of the question.
        owner: UserName,
    },
}

/// Errors returned by [`crate::Board`] and [`crate::Member`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A user with this name is already registered.
    #[error("user '{name}' already exists on board '{board}'")]
    DuplicateUser {
        /// Board name.
        board: String,
        /// Conflicting user name.
        name: UserName,
    },

    /// No user with this name is registered.
    #[error("user '{name}' is not registered on this board")]
    UnknownUser {
        /// Requested user name.
        name: String,
    },

    /// The question does not exist on this board.
    #[error("question {id} not found")]
    UnknownQuestion {
        /// Requested question id.
        id: QuestionId,
    },

    /// The answer does not exist on this board.
    #[error("answer {id} not found")]
    UnknownAnswer {
        /// Requested answer id.
        id: AnswerId,
    },

    /// Question or answer text was blank.
    #[error("post text must not be empty")]
    EmptyText,

    /// The user name failed validation.
    #[error(transparent)]
    InvalidUserName(#[from] UserNameError),

    /// The vote broke a voting rule.
    #[error(transparent)]
    Voting(#[from] VotingError),

    /// The acceptance broke an acceptance rule.
    #[error(transparent)]
    Acceptance(#[from] AcceptanceError),
}

impl BoardError {
    /// Whether this error is a rejected vote.
    #[must_use]
    pub const fn is_voting(&self) -> bool {
        matches!(self, Self::Voting(_))
    }

    /// Whether this error is a rejected acceptance.
    #[must_use]
    pub const fn is_acceptance(&self) -> bool {
        matches!(self, Self::Acceptance(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> UserName {
        UserName::new(raw).expect("valid name")
    }

    #[test]
    fn voting_error_formats_correctly() {
        assert_eq!(
            VotingError::SelfVote.to_string(),
            "You cannot vote for yourself!"
        );
    }

    #[test]
    fn acceptance_error_formats_with_owner_name() {
        let err = AcceptanceError::NotQuestionOwner {
            owner: name("questioner"),
        };
        assert_eq!(
            err.to_string(),
            "Only questioner can accept this answer as it is their question"
        );
    }

    #[test]
    fn board_error_keeps_rule_messages() {
        let voting = BoardError::from(VotingError::SelfVote);
        assert_eq!(voting.to_string(), "You cannot vote for yourself!");
        assert!(voting.is_voting());
        assert!(!voting.is_acceptance());

        let acceptance = BoardError::from(AcceptanceError::NotQuestionOwner {
            owner: name("questioner"),
        });
        assert_eq!(
            acceptance.to_string(),
            "Only questioner can accept this answer as it is their question"
        );
        assert!(acceptance.is_acceptance());
    }

    #[test]
    fn duplicate_user_formats_correctly() {
        let err = BoardError::DuplicateUser {
            board: "Java Unit Testing".to_owned(),
            name: name("questioner"),
        };
        assert_eq!(
            err.to_string(),
            "user 'questioner' already exists on board 'Java Unit Testing'"
        );
    }

    #[test]
    fn unknown_user_formats_correctly() {
        let err = BoardError::UnknownUser {
            name: "ghost".to_owned(),
        };
        assert_eq!(err.to_string(), "user 'ghost' is not registered on this board");
    }

    #[test]
    fn invalid_user_name_is_transparent() {
        let err = BoardError::from(UserNameError::Empty);
        assert_eq!(err.to_string(), "user name must not be empty");
    }
}
