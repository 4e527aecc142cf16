//! Unit tests for session configuration parsing.

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use std::collections::HashMap;
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let file = NamedTempFile::new().expect("create key file");
    std::fs::write(file.path(), vec![b'k'; len]).expect("write key file");
    file
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn release_key() -> NamedTempFile {
    key_file(SESSION_KEY_MIN_LEN)
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path().to_string_lossy().into_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

fn release_error(vars: HashMap<&'static str, String>) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), BuildMode::Release) {
        Ok(_) => panic!("release settings unexpectedly accepted"),
        Err(error) => error,
    }
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(release_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&release_key);
    vars.remove(missing);

    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(COOKIE_SECURE_ENV, "")]
#[case(SAMESITE_ENV, "sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "2")]
fn release_rejects_unparsable_values(
    release_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&release_key);
    vars.insert(name, value.to_owned());

    let err = release_error(vars);
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: n, .. } if n == name));
}

#[rstest]
fn release_rejects_ephemeral_keys(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());

    assert!(matches!(
        release_error(vars),
        SessionConfigError::EphemeralNotAllowed
    ));
}

#[rstest]
fn release_rejects_missing_key_file(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(KEY_FILE_ENV, "/definitely/not/here/session_key".to_owned());

    assert!(matches!(
        release_error(vars),
        SessionConfigError::KeyRead { .. }
    ));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(SESSION_KEY_MIN_LEN - 1);
    let err = release_error(release_vars(&short));
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, min_len, .. }
            if length == SESSION_KEY_MIN_LEN - 1 && min_len == SESSION_KEY_MIN_LEN
    ));
}

#[rstest]
fn release_rejects_insecure_same_site_none(release_key: NamedTempFile) {
    let mut vars = release_vars(&release_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());

    assert!(matches!(
        release_error(vars),
        SessionConfigError::InsecureSameSiteNone
    ));
}

#[rstest]
fn release_accepts_complete_settings(release_key: NamedTempFile) {
    let settings = session_settings_from_env(&mock_env(release_vars(&release_key)), BuildMode::Release)
        .expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
fn debug_defaults_are_secure_and_lax() {
    let settings = session_settings_from_env(&mock_env(HashMap::new()), BuildMode::Debug)
        .expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(SAMESITE_ENV, "unexpected")]
#[case(COOKIE_SECURE_ENV, "perhaps")]
fn debug_invalid_values_fall_back(#[case] name: &'static str, #[case] value: &str) {
    let vars = HashMap::from([(name, value.to_owned())]);
    let settings = session_settings_from_env(&mock_env(vars), BuildMode::Debug)
        .expect("debug falls back");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
fn debug_short_key_falls_back_instead_of_panicking() {
    let short = key_file(8);
    let vars = HashMap::from([(KEY_FILE_ENV, short.path().to_string_lossy().into_owned())]);
    assert!(session_settings_from_env(&mock_env(vars), BuildMode::Debug).is_ok());
}
