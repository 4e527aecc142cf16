//! Tests for the account pages.

use super::*;
use crate::domain::Role;
use crate::inbound::http::test_utils::{
    TEST_PASSWORD, get_page, in_memory_state, location, session_cookie, sign_in, test_app,
};
use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;

async fn post_form(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    fields: &[(&str, &str)],
) -> actix_web::dev::ServiceResponse {
    let req = test::TestRequest::post()
        .uri(uri)
        .set_form(fields)
        .to_request();
    test::call_service(app, req).await
}

#[actix_web::test]
async fn index_renders_for_anonymous_visitors() {
    let app = test::init_service(test_app(in_memory_state())).await;
    let (status, body) = get_page(&app, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/signup"));
}

#[actix_web::test]
async fn signup_then_login_reaches_dashboard() {
    let app = test::init_service(test_app(in_memory_state())).await;
    let cookie = sign_in(&app, "ada", Role::Teacher).await;

    let (status, body) = get_page(&app, "/dashboard", Some(cookie)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(LOGGED_IN_MESSAGE));
    assert!(body.contains("ada"));
}

#[rstest]
#[case(&[("username", ""), ("password", "pw"), ("role", "student")])]
#[case(&[("username", "ada"), ("password", ""), ("role", "student")])]
#[case(&[("username", "ada"), ("password", "pw"), ("role", "admin")])]
#[case(&[("username", "ada"), ("password", "pw")])]
#[actix_web::test]
async fn incomplete_signup_is_flashed(#[case] fields: &[(&str, &str)]) {
    let app = test::init_service(test_app(in_memory_state())).await;
    let res = post_form(&app, "/signup", fields).await;
    assert_eq!(res.status(), StatusCode::FOUND);
    assert_eq!(location(&res), "/signup");

    let (_, body) = get_page(&app, "/signup", Some(session_cookie(&res))).await;
    assert!(body.contains(MISSING_FIELDS_MESSAGE));
}

#[actix_web::test]
async fn duplicate_username_is_rejected() {
    let app = test::init_service(test_app(in_memory_state())).await;
    let fields = [
        ("username", "ada"),
        ("password", "pw"),
        ("role", "student"),
    ];
    let first = post_form(&app, "/signup", &fields).await;
    assert_eq!(location(&first), "/login");

    let second = post_form(&app, "/signup", &fields).await;
    assert_eq!(location(&second), "/signup");
    let (_, body) = get_page(&app, "/signup", Some(session_cookie(&second))).await;
    assert!(body.contains("Username already exists."));
}

#[rstest]
#[case("ada", "wrong")]
#[case("nobody", TEST_PASSWORD)]
#[case("", TEST_PASSWORD)]
#[case("ada", "")]
#[actix_web::test]
async fn bad_credentials_redirect_back_to_login(#[case] username: &str, #[case] password: &str) {
    let app = test::init_service(test_app(in_memory_state())).await;
    sign_in(&app, "ada", Role::Student).await;

    let res = post_form(
        &app,
        "/login",
        &[("username", username), ("password", password)],
    )
    .await;
    assert_eq!(location(&res), "/login");
    let (_, body) = get_page(&app, "/login", Some(session_cookie(&res))).await;
    assert!(body.contains(INVALID_CREDENTIALS_MESSAGE));
}

#[actix_web::test]
async fn login_trims_the_username() {
    let app = test::init_service(test_app(in_memory_state())).await;
    sign_in(&app, "ada", Role::Student).await;

    let res = post_form(
        &app,
        "/login",
        &[("username", "  ada "), ("password", TEST_PASSWORD)],
    )
    .await;
    assert_eq!(location(&res), "/dashboard");
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let app = test::init_service(test_app(in_memory_state())).await;
    let cookie = sign_in(&app, "ada", Role::Student).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(location(&res), "/");
    let after_logout = session_cookie(&res);

    let (_, body) = get_page(&app, "/", Some(after_logout.clone())).await;
    assert!(body.contains(LOGGED_OUT_MESSAGE));

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .cookie(after_logout)
            .to_request(),
    )
    .await;
    assert_eq!(location(&res), "/login");
}
