//! Question-and-answer board with voting, acceptance, and reputation rules.
//!
//! A [`Board`] registers users and stores the questions they ask. Users act
//! on the board through a [`Member`] handle: asking and answering questions,
//! voting on other people's posts, and accepting an answer to their own
//! question. Every vote or acceptance adjusts the reputation of the post's
//! author, never the actor.
//!
//! # Overview
//!
//! - Questions and answers share vote bookkeeping through [`Votable`]
//! - Reputation deltas come from a [`ReputationPolicy`], configurable via
//!   [`ReputationSettings`]
//! - Rule violations surface as [`VotingError`] and [`AcceptanceError`],
//!   wrapped by [`BoardError`] at the board boundary
//!
//! # Example
//!
//! ```
//! use overboard::Board;
//!
//! let mut board = Board::new("Rust Help");
//! let asker = board.create_user("questioner").expect("new user");
//! let helper = board.create_user("answerer").expect("new user");
//!
//! let question = board
//!     .member(&asker)
//!     .and_then(|mut m| m.ask_question("How do lifetimes work?"))
//!     .expect("question stored");
//! let answer = board
//!     .member(&helper)
//!     .and_then(|mut m| m.answer_question(question, "Read the book."))
//!     .expect("answer stored");
//!
//! board
//!     .member(&asker)
//!     .and_then(|mut m| m.accept_answer(answer))
//!     .expect("owner may accept");
//!
//! assert_eq!(board.user(&helper).map(|u| u.reputation()), Some(15));
//! ```

mod answer;
mod board;
mod config;
mod error;
mod member;
mod question;
mod reputation;
mod summary;
mod user;
mod votable;

pub use answer::{Answer, AnswerId};
pub use board::Board;
pub use config::ReputationSettings;
pub use error::{AcceptanceError, BoardError, VotingError};
pub use member::{AcceptanceOutcome, Member, VoteOutcome};
pub use question::{Question, QuestionId};
pub use reputation::{
    ACCEPTED_ANSWER, ANSWER_DOWN_VOTE, ANSWER_UP_VOTE, PostKind, QUESTION_DOWN_VOTE,
    QUESTION_UP_VOTE, ReputationPolicy, VoteDirection,
};
pub use summary::{AnswerSummary, BoardSummary, QuestionSummary, UserSummary};
pub use user::{USER_NAME_MAX, User, UserName, UserNameError};
pub use votable::{PostId, Tally, Votable};
