//! Tests for the account service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{MockCredentialHasher, MockUserRepository};
use crate::domain::{ErrorCode, PasswordHash, Role, Username};
use rstest::rstest;

fn stored_user(name: &str, role: Role) -> User {
    User::new(
        Username::new(name).expect("username"),
        PasswordHash::new(format!("hashed:{name}")).expect("hash"),
        role,
    )
}

fn make_service(
    users: MockUserRepository,
    hasher: MockCredentialHasher,
) -> AccountService<MockUserRepository, MockCredentialHasher> {
    AccountService::new(Arc::new(users), Arc::new(hasher))
}

#[tokio::test]
async fn register_hashes_password_and_stores_user() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .times(1)
        .return_once(|_| Ok(None));
    users
        .expect_insert()
        .withf(|user| {
            user.username().as_ref() == "ada"
                && user.role() == Role::Teacher
                && user.password_hash().as_ref() == "hashed"
        })
        .times(1)
        .return_once(|_| Ok(()));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_hash()
        .withf(|password| password == "secret")
        .times(1)
        .return_once(|_| Ok(PasswordHash::new("hashed").expect("hash")));

    let service = make_service(users, hasher);
    let request = SignupRequest::try_from_parts("ada", "secret", "teacher").expect("request");

    let user = service.register(&request).await.expect("register succeeds");
    assert_eq!(user.username().as_ref(), "ada");
    assert_ne!(user.password_hash().as_ref(), "secret");
}

#[tokio::test]
async fn register_rejects_existing_username_without_hashing() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .return_once(|_| Ok(Some(stored_user("ada", Role::Student))));
    users.expect_insert().never();
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_hash().never();

    let service = make_service(users, hasher);
    let request = SignupRequest::try_from_parts("ada", "pw", "student").expect("request");

    let err = service.register(&request).await.expect_err("conflict");
    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), "Username already exists.");
}

#[tokio::test]
async fn register_maps_racing_duplicate_to_conflict() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_username().return_once(|_| Ok(None));
    users
        .expect_insert()
        .return_once(|_| Err(UserPersistenceError::duplicate("ada")));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_hash()
        .return_once(|_| Ok(PasswordHash::new("hashed").expect("hash")));

    let service = make_service(users, hasher);
    let request = SignupRequest::try_from_parts("ada", "pw", "student").expect("request");

    let err = service.register(&request).await.expect_err("conflict");
    assert_eq!(err.code(), ErrorCode::Conflict);
}

#[rstest]
#[case(UserPersistenceError::io("denied"), ErrorCode::InternalError)]
#[case(UserPersistenceError::corrupt("bad json"), ErrorCode::InternalError)]
#[tokio::test]
async fn store_failures_are_mapped(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .return_once(move |_| Err(failure));
    let service = make_service(users, MockCredentialHasher::new());
    let credentials = LoginCredentials::try_from_parts("ada", "pw").expect("credentials");

    let err = service.authenticate(&credentials).await.expect_err("fails");
    assert_eq!(err.code(), expected);
}

#[tokio::test]
async fn authenticate_returns_session_identity() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .return_once(|_| Ok(Some(stored_user("ada", Role::Teacher))));
    let mut hasher = MockCredentialHasher::new();
    hasher
        .expect_verify()
        .withf(|password, hash| password == "pw" && hash.as_ref() == "hashed:ada")
        .return_const(true);

    let service = make_service(users, hasher);
    let credentials = LoginCredentials::try_from_parts("ada", "pw").expect("credentials");

    let session = service.authenticate(&credentials).await.expect("login");
    assert_eq!(session.username().as_ref(), "ada");
    assert_eq!(session.role(), Role::Teacher);
}

#[rstest]
#[case(None, false)]
#[case(Some(stored_user("ada", Role::Student)), false)]
#[tokio::test]
async fn failed_logins_share_one_message(#[case] existing: Option<User>, #[case] matches: bool) {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_username()
        .return_once(move |_| Ok(existing));
    let mut hasher = MockCredentialHasher::new();
    hasher.expect_verify().return_const(matches);

    let service = make_service(users, hasher);
    let credentials = LoginCredentials::try_from_parts("ada", "wrong").expect("credentials");

    let err = service.authenticate(&credentials).await.expect_err("rejected");
    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(err.message(), "Invalid username or password.");
}
