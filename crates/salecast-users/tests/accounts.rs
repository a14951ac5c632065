//! Signup and login against both repository implementations.

use pretty_assertions::assert_eq;
use rstest::rstest;
use salecast_core::ErrorKind;
use salecast_users::{InMemoryUsers, JsonlUsers, UserError, UserRepository, login, signup};

fn jsonl_repo() -> (tempfile::TempDir, JsonlUsers) {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let repo = JsonlUsers::open(tmp.path().join("user_data").join("users.jsonl")).unwrap();
    (tmp, repo)
}

fn exercise(repo: &mut dyn UserRepository) {
    let alice = signup(repo, "alice@example.com", "s3cret").unwrap();
    let bob = signup(repo, "bob@example.com", "pw").unwrap();
    assert_eq!(alice.id.as_str(), "1");
    assert_eq!(bob.id.as_str(), "2");
    assert_ne!(alice.password_hash, "s3cret");

    let logged_in = login(repo, "alice@example.com", "s3cret").unwrap();
    assert_eq!(logged_in.id, alice.id);

    let err = signup(repo, "alice@example.com", "other").unwrap_err();
    assert!(matches!(err, UserError::EmailTaken(ref email) if email == "alice@example.com"));
}

#[test]
fn in_memory_signup_and_login() {
    exercise(&mut InMemoryUsers::new());
}

#[test]
fn jsonl_signup_and_login() {
    let (_tmp, mut repo) = jsonl_repo();
    exercise(&mut repo);
    assert_eq!(repo.all().unwrap().len(), 2);
}

#[rstest]
#[case("alice@example.com", "wrong")]
#[case("nobody@example.com", "s3cret")]
fn bad_credentials_are_rejected(#[case] email: &str, #[case] password: &str) {
    let mut repo = InMemoryUsers::new();
    signup(&mut repo, "alice@example.com", "s3cret").unwrap();

    let err = login(&repo, email, password).unwrap_err();
    assert!(matches!(err, UserError::InvalidCredentials));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[rstest]
#[case("", "pw")]
#[case("   ", "pw")]
#[case("a@example.com", "")]
fn blank_fields_are_validation_errors(#[case] email: &str, #[case] password: &str) {
    let mut repo = InMemoryUsers::new();
    let err = signup(&mut repo, email, password).unwrap_err();
    assert!(matches!(err, UserError::Validation(_)));
    assert!(repo.is_empty());
}
