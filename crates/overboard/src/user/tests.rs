//! Tests for user names and reputation bookkeeping.

use rstest::rstest;

use super::*;

#[rstest]
#[case::simple("questioner")]
#[case::with_inner_space("other user")]
#[case::unicode("Zoë")]
fn accepts_valid_names(#[case] raw: &str) {
    let name = UserName::new(raw).expect("valid name");
    assert_eq!(name.as_ref(), raw);
    assert_eq!(name.to_string(), raw);
}

#[rstest]
#[case::empty("", UserNameError::Empty)]
#[case::blank("   ", UserNameError::Empty)]
#[case::leading(" ada", UserNameError::SurroundingWhitespace)]
#[case::trailing("ada\t", UserNameError::SurroundingWhitespace)]
fn rejects_invalid_names(#[case] raw: &str, #[case] expected: UserNameError) {
    assert_eq!(UserName::new(raw), Err(expected));
}

#[test]
fn accepts_name_at_maximum_length() {
    let raw = "a".repeat(USER_NAME_MAX);
    assert!(UserName::new(raw).is_ok());
}

#[test]
fn rejects_name_over_maximum_length() {
    let raw = "a".repeat(USER_NAME_MAX + 1);
    assert_eq!(
        UserName::new(raw),
        Err(UserNameError::TooLong {
            max: USER_NAME_MAX
        })
    );
}

#[test]
fn name_errors_format_for_humans() {
    assert_eq!(UserNameError::Empty.to_string(), "user name must not be empty");
    assert_eq!(
        UserNameError::TooLong { max: 64 }.to_string(),
        "user name must be at most 64 characters"
    );
}

#[test]
fn serde_rejects_invalid_names() {
    let result: Result<UserName, _> = serde_json::from_str("\"  \"");
    assert!(result.is_err());

    let name: UserName = serde_json::from_str("\"answerer\"").expect("valid name");
    assert_eq!(name.as_ref(), "answerer");
}

#[test]
fn new_user_starts_without_reputation_or_posts() {
    let user = User::new(UserName::new("questioner").expect("valid name"));
    assert_eq!(user.reputation(), 0);
    assert!(user.questions().is_empty());
    assert!(user.answers().is_empty());
}

#[test]
fn reputation_accumulates_signed_deltas() {
    let mut user = User::new(UserName::new("answerer").expect("valid name"));
    user.adjust_reputation(10);
    user.adjust_reputation(-1);
    assert_eq!(user.reputation(), 9);
}

#[test]
fn reputation_saturates_instead_of_overflowing() {
    let mut user = User::new(UserName::new("answerer").expect("valid name"));
    user.adjust_reputation(i64::MAX);
    user.adjust_reputation(1);
    assert_eq!(user.reputation(), i64::MAX);
}
