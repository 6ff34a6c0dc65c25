//! Tests for the board registry and its read model.

use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::error::BoardError;
use crate::user::UserNameError;

#[fixture]
fn board() -> Board {
    Board::new("Java Unit Testing")
}

#[rstest]
fn new_board_is_empty(board: Board) {
    assert_eq!(board.name(), "Java Unit Testing");
    assert!(board.users().is_empty());
    assert!(board.questions().is_empty());
    assert_eq!(board.policy(), &ReputationPolicy::default());
}

#[rstest]
fn create_user_registers_in_creation_order(mut board: Board) {
    for raw in ["questioner", "answerer", "otherUser"] {
        board.create_user(raw).expect("unique name");
    }

    let names: Vec<&str> = board
        .users()
        .iter()
        .map(|user| user.name().as_ref())
        .collect();
    assert_eq!(names, vec!["questioner", "answerer", "otherUser"]);
    assert!(board.users().iter().all(|user| user.reputation() == 0));
}

#[rstest]
fn create_user_rejects_duplicates(mut board: Board) {
    board.create_user("questioner").expect("first registration");

    let result = board.create_user("questioner");
    assert_eq!(
        result,
        Err(BoardError::DuplicateUser {
            board: "Java Unit Testing".to_owned(),
            name: UserName::new("questioner").expect("valid name"),
        })
    );
    assert_eq!(board.users().len(), 1);
}

#[rstest]
#[case::blank("   ", UserNameError::Empty)]
#[case::padded(" questioner", UserNameError::SurroundingWhitespace)]
fn create_user_rejects_invalid_names(
    mut board: Board,
    #[case] raw: &str,
    #[case] expected: UserNameError,
) {
    assert_eq!(
        board.create_user(raw),
        Err(BoardError::InvalidUserName(expected))
    );
    assert!(board.users().is_empty());
}

#[rstest]
fn boards_do_not_share_user_namespaces(mut board: Board) {
    let mut other = Board::new("Rust Help");
    board.create_user("questioner").expect("first board");
    other.create_user("questioner").expect("second board");

    assert!(board.user("questioner").is_some());
    assert!(other.user("questioner").is_some());
    assert!(other.user("answerer").is_none());
}

#[rstest]
fn member_requires_registered_user(mut board: Board) {
    let result = board.member("ghost");
    assert!(matches!(
        result,
        Err(BoardError::UnknownUser { name }) if name == "ghost"
    ));
}

#[rstest]
fn lookups_resolve_questions_and_answers(mut board: Board) {
    let asker = board.create_user("questioner").expect("new user");
    let helper = board.create_user("answerer").expect("new user");
    let question = board
        .member(&asker)
        .and_then(|mut member| member.ask_question("question"))
        .expect("question stored");
    let answer = board
        .member(&helper)
        .and_then(|mut member| member.answer_question(question, "answer"))
        .expect("answer stored");

    let stored = board.question(question).expect("question exists");
    assert_eq!(stored.text(), "question");
    assert_eq!(stored.answers().len(), 1);

    let found = board.answer(answer).expect("answer exists");
    assert_eq!(found.question(), question);
    assert_eq!(found.text(), "answer");

    let author = board.user(&helper).expect("answerer exists");
    assert_eq!(author.answers(), &[answer]);
    let asker_record = board.user(&asker).expect("questioner exists");
    assert_eq!(asker_record.questions(), &[question]);
}

#[rstest]
fn summary_serialises_board_state(mut board: Board) {
    let asker = board.create_user("questioner").expect("new user");
    let helper = board.create_user("answerer").expect("new user");
    let question = board
        .member(&asker)
        .and_then(|mut member| member.ask_question("question"))
        .expect("question stored");
    let answer = board
        .member(&helper)
        .and_then(|mut member| member.answer_question(question, "answer"))
        .expect("answer stored");
    board
        .member(&asker)
        .and_then(|mut member| member.accept_answer(answer))
        .expect("owner accepts");

    let value = serde_json::to_value(board.summary()).expect("serialise summary");
    assert_eq!(
        value,
        json!({
            "name": "Java Unit Testing",
            "users": [
                { "name": "questioner", "reputation": 0 },
                { "name": "answerer", "reputation": 15 }
            ],
            "questions": [{
                "id": question.to_string(),
                "owner": "questioner",
                "text": "question",
                "score": 0,
                "acceptedAnswer": answer.to_string(),
                "answers": [{
                    "id": answer.to_string(),
                    "owner": "answerer",
                    "text": "answer",
                    "score": 0,
                    "accepted": true
                }]
            }]
        })
    );
}

#[rstest]
fn summary_omits_missing_accepted_answer(mut board: Board) {
    let asker = board.create_user("questioner").expect("new user");
    board
        .member(&asker)
        .and_then(|mut member| member.ask_question("question"))
        .expect("question stored");

    let value = serde_json::to_value(board.summary()).expect("serialise summary");
    let question = value
        .get("questions")
        .and_then(|questions| questions.get(0))
        .expect("one question");
    assert!(question.get("acceptedAnswer").is_none());
}
