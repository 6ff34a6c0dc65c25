//! Operations a registered user performs on a board.
//!
//! A [`Member`] is a user acting on the board that owns them. All rule
//! checks run before any state changes, so a rejected call leaves scores,
//! acceptance flags, and reputation untouched.

use tracing::{debug, warn};

use crate::answer::{Answer, AnswerId};
use crate::board::{Board, find_question_mut, find_user_mut};
use crate::error::{AcceptanceError, BoardError, VotingError};
use crate::question::{Question, QuestionId};
use crate::reputation::VoteDirection;
use crate::user::{User, UserName};
use crate::votable::{PostId, Votable};

/// Result of a vote that passed the self-vote check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was recorded and `delta` credited to the post's author.
    Applied {
        /// Reputation change applied to the author.
        delta: i64,
    },
    /// The voter had already voted this way; nothing changed.
    AlreadyCast,
}

/// Result of an acceptance that passed the ownership check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptanceOutcome {
    /// The answer is now accepted.
    Accepted {
        /// Sibling answer that lost its accepted flag, if any.
        previous: Option<AnswerId>,
        /// Reputation change applied to the answer's author; zero when the
        /// answer earned its bonus on an earlier acceptance.
        delta: i64,
    },
    /// The answer was already accepted; nothing changed.
    AlreadyAccepted,
}

/// A registered user acting on a board.
#[derive(Debug)]
pub struct Member<'a> {
    board: &'a mut Board,
    name: UserName,
}

impl<'a> Member<'a> {
    pub(crate) const fn new(board: &'a mut Board, name: UserName) -> Self {
        Self { board, name }
    }

    /// Name of the acting user.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Current reputation of the acting user.
    #[must_use]
    pub fn reputation(&self) -> i64 {
        self.board.user(&self.name).map_or(0, User::reputation)
    }

    /// Asks a new question owned by this user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyText`] when `text` is blank.
    pub fn ask_question(&mut self, text: impl Into<String>) -> Result<QuestionId, BoardError> {
        let body = non_blank(text.into())?;
        let Board {
            name: board_name,
            users,
            questions,
            ..
        } = &mut *self.board;

        let author = find_user_mut(users, &self.name)?;
        let question = Question::new(self.name.clone(), body);
        let id = question.id();
        author.record_question(id);
        questions.push(question);

        debug!(board = %board_name, owner = %self.name, question = %id, "question asked");
        Ok(id)
    }

    /// Posts an answer to `question`, owned by this user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyText`] when `text` is blank, or
    /// [`BoardError::UnknownQuestion`] when the question is not on this board.
    pub fn answer_question(
        &mut self,
        question: QuestionId,
        text: impl Into<String>,
    ) -> Result<AnswerId, BoardError> {
        let body = non_blank(text.into())?;
        let Board {
            name: board_name,
            users,
            questions,
            answer_parents,
            ..
        } = &mut *self.board;

        let target = find_question_mut(questions, question)?;
        let author = find_user_mut(users, &self.name)?;
        let answer = Answer::new(self.name.clone(), question, body);
        let id = answer.id();
        target.push_answer(answer);
        author.record_answer(id);
        answer_parents.insert(id, question);

        debug!(
            board = %board_name,
            owner = %self.name,
            question = %question,
            answer = %id,
            "question answered"
        );
        Ok(id)
    }

    /// Up-votes a question or answer written by someone else.
    ///
    /// # Errors
    ///
    /// Returns [`VotingError::SelfVote`] (wrapped in [`BoardError::Voting`])
    /// when this user wrote the post, or a lookup error when it does not
    /// exist.
    pub fn up_vote(&mut self, post: impl Into<PostId>) -> Result<VoteOutcome, BoardError> {
        self.cast(post.into(), VoteDirection::Up)
    }

    /// Down-votes a question or answer written by someone else.
    ///
    /// # Errors
    ///
    /// As for [`Member::up_vote`].
    pub fn down_vote(&mut self, post: impl Into<PostId>) -> Result<VoteOutcome, BoardError> {
        self.cast(post.into(), VoteDirection::Down)
    }

    /// Accepts `answer` as the solution to this user's question.
    ///
    /// Any previously accepted sibling loses its flag. The bonus is credited
    /// the first time an answer is accepted and never again for that answer.
    ///
    /// # Errors
    ///
    /// Returns [`AcceptanceError::NotQuestionOwner`] (wrapped in
    /// [`BoardError::Acceptance`]) when this user did not ask the question,
    /// or [`BoardError::UnknownAnswer`] when the answer is not on this board.
    pub fn accept_answer(&mut self, answer: AnswerId) -> Result<AcceptanceOutcome, BoardError> {
        let Board {
            name: board_name,
            policy,
            users,
            questions,
            answer_parents,
        } = &mut *self.board;

        let question_id = answer_parents
            .get(&answer)
            .copied()
            .ok_or(BoardError::UnknownAnswer { id: answer })?;
        let question = find_question_mut(questions, question_id)?;

        if !question.is_owned_by(&self.name) {
            warn!(
                board = %board_name,
                actor = %self.name,
                owner = %question.owner(),
                answer = %answer,
                "acceptance rejected"
            );
            return Err(AcceptanceError::NotQuestionOwner {
                owner: question.owner().clone(),
            }
            .into());
        }

        if question.accepted_answer() == Some(answer) {
            debug!(board = %board_name, answer = %answer, "answer already accepted");
            return Ok(AcceptanceOutcome::AlreadyAccepted);
        }

        let answer_owner = question
            .answer(answer)
            .map(|target| target.owner().clone())
            .ok_or(BoardError::UnknownAnswer { id: answer })?;
        let author = find_user_mut(users, &answer_owner)?;

        let previous = question.accept(answer);
        let first_acceptance = question
            .answer_mut(answer)
            .is_some_and(Answer::claim_bonus);
        let delta = if first_acceptance {
            policy.acceptance_bonus()
        } else {
            0
        };
        author.adjust_reputation(delta);

        debug!(
            board = %board_name,
            question = %question_id,
            answer = %answer,
            owner = %answer_owner,
            delta,
            "answer accepted"
        );
        Ok(AcceptanceOutcome::Accepted { previous, delta })
    }

    fn cast(&mut self, post: PostId, direction: VoteDirection) -> Result<VoteOutcome, BoardError> {
        let Board {
            name: board_name,
            policy,
            users,
            questions,
            answer_parents,
        } = &mut *self.board;

        let target: &mut dyn Votable = match post {
            PostId::Question(id) => find_question_mut(questions, id)? as &mut dyn Votable,
            PostId::Answer(id) => {
                let parent = answer_parents
                    .get(&id)
                    .copied()
                    .ok_or(BoardError::UnknownAnswer { id })?;
                find_question_mut(questions, parent)?
                    .answer_mut(id)
                    .ok_or(BoardError::UnknownAnswer { id })? as &mut dyn Votable
            }
        };

        if target.is_owned_by(&self.name) {
            warn!(
                board = %board_name,
                voter = %self.name,
                post = %post,
                direction = %direction,
                "self vote rejected"
            );
            return Err(VotingError::SelfVote.into());
        }

        let owner = target.owner().clone();
        let author = find_user_mut(users, &owner)?;

        if !target.vote(&self.name, direction) {
            debug!(
                board = %board_name,
                voter = %self.name,
                post = %post,
                direction = %direction,
                "repeat vote ignored"
            );
            return Ok(VoteOutcome::AlreadyCast);
        }

        let delta = policy.vote_delta(target.kind(), direction);
        author.adjust_reputation(delta);

        debug!(
            board = %board_name,
            voter = %self.name,
            owner = %owner,
            post = %post,
            direction = %direction,
            delta,
            "vote applied"
        );
        Ok(VoteOutcome::Applied { delta })
    }
}

fn non_blank(text: String) -> Result<String, BoardError> {
    if text.trim().is_empty() {
        return Err(BoardError::EmptyText);
    }
    Ok(text)
}
