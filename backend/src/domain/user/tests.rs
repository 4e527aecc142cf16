//! Tests for account primitives.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_usernames_are_rejected(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[rstest]
#[case("ada", "ada")]
#[case("  grace  ", "grace")]
#[case("Mixed Case", "Mixed Case")]
fn usernames_are_trimmed(#[case] raw: &str, #[case] expected: &str) {
    let name = Username::new(raw).expect("valid username");
    assert_eq!(name.as_ref(), expected);
}

#[rstest]
#[case("student", Role::Student)]
#[case("teacher", Role::Teacher)]
fn roles_parse_from_wire_names(#[case] raw: &str, #[case] expected: Role) {
    assert_eq!(raw.parse::<Role>(), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("")]
#[case("admin")]
#[case("Teacher")]
fn unknown_roles_are_rejected(#[case] raw: &str) {
    assert_eq!(raw.parse::<Role>(), Err(UserValidationError::InvalidRole));
}

#[rstest]
fn only_teachers_author_lectures() {
    assert!(Role::Teacher.can_author_lectures());
    assert!(!Role::Student.can_author_lectures());
}

#[rstest]
fn user_serialises_to_flat_record() {
    let user = User::new(
        Username::new("ada").expect("username"),
        PasswordHash::new("$argon2id$stub").expect("hash"),
        Role::Teacher,
    );

    let value = serde_json::to_value(&user).expect("serialise user");
    assert_eq!(
        value,
        json!({
            "username": "ada",
            "password_hash": "$argon2id$stub",
            "role": "teacher",
        })
    );
}

#[rstest]
fn user_record_with_blank_username_fails_to_load() {
    let value = json!({ "username": " ", "password_hash": "x", "role": "student" });
    assert!(serde_json::from_value::<User>(value).is_err());
}

#[rstest]
fn password_hash_debug_hides_contents() {
    let hash = PasswordHash::new("$argon2id$secret").expect("hash");
    assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
}

#[rstest]
fn session_user_mirrors_account() {
    let user = User::new(
        Username::new("grace").expect("username"),
        PasswordHash::new("h").expect("hash"),
        Role::Student,
    );
    let session = user.session_user();
    assert_eq!(session.username().as_ref(), "grace");
    assert_eq!(session.role(), Role::Student);
}
