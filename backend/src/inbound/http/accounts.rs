//! Account pages: landing, signup, login and logout.
//!
//! ```text
//! GET  /            landing page
//! GET  /signup      signup form
//! POST /signup      username=ada&password=pw&role=teacher
//! GET  /login       login form
//! POST /login       username=ada&password=pw
//! GET  /logout      clear session
//! ```
//!
//! Form handlers never answer with an error body for bad input; they flash
//! a message and redirect, leaving JSON errors for store failures.

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tera::Context;

use crate::domain::ports::INVALID_CREDENTIALS_MESSAGE;
use crate::domain::{Error, ErrorCode, LoginCredentials, SignupRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::flash::FlashMessage;
use crate::inbound::http::pages::{Page, PageRenderer, redirect};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Flash shown when a signup form is incomplete.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
/// Flash shown after a successful signup.
pub const ACCOUNT_CREATED_MESSAGE: &str = "Account created. Please log in.";
/// Flash shown after a successful login.
pub const LOGGED_IN_MESSAGE: &str = "Logged in successfully.";
/// Flash shown after logout.
pub const LOGGED_OUT_MESSAGE: &str = "Logged out.";

/// Signup form fields. Missing fields deserialise as empty strings so they
/// fail validation rather than extraction.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    /// Requested or existing username.
    pub username: String,
    /// Plain-text password as typed.
    pub password: String,
    /// `student` or `teacher`.
    pub role: String,
}

/// Login form fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Requested or existing username.
    pub username: String,
    /// Plain-text password as typed.
    pub password: String,
}

/// Landing page.
#[get("/")]
pub async fn index(
    pages: web::Data<PageRenderer>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    pages.respond(Page::Index, &session, Context::new())
}

/// Signup form.
#[get("/signup")]
pub async fn signup_form(
    pages: web::Data<PageRenderer>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    pages.respond(Page::Signup, &session, Context::new())
}

/// Create an account and send the user to the login page.
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<SignupForm>,
) -> ApiResult<HttpResponse> {
    let SignupForm {
        username,
        password,
        role,
    } = form.into_inner();
    let Ok(request) = SignupRequest::try_from_parts(&username, &password, &role) else {
        session.push_flash(FlashMessage::error(MISSING_FIELDS_MESSAGE))?;
        return Ok(redirect("/signup"));
    };

    match state.signup.register(&request).await {
        Ok(_) => {
            session.push_flash(FlashMessage::success(ACCOUNT_CREATED_MESSAGE))?;
            Ok(redirect("/login"))
        }
        Err(err) if err.code() == ErrorCode::Conflict => {
            session.push_flash(FlashMessage::error(err.message()))?;
            Ok(redirect("/signup"))
        }
        Err(err) => Err(err),
    }
}

/// Login form.
#[get("/login")]
pub async fn login_form(
    pages: web::Data<PageRenderer>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    pages.respond(Page::Login, &session, Context::new())
}

/// Verify credentials and start a session.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LoginForm>,
) -> ApiResult<HttpResponse> {
    let LoginForm { username, password } = form.into_inner();
    let Ok(credentials) = LoginCredentials::try_from_parts(&username, &password) else {
        return reject_login(&session);
    };

    match state.login.authenticate(&credentials).await {
        Ok(user) => {
            session.persist_user(&user)?;
            session.push_flash(FlashMessage::success(LOGGED_IN_MESSAGE))?;
            Ok(redirect("/dashboard"))
        }
        Err(err) if err.code() == ErrorCode::Unauthorized => reject_login(&session),
        Err(err) => Err(err),
    }
}

fn reject_login(session: &SessionContext) -> Result<HttpResponse, Error> {
    session.push_flash(FlashMessage::error(INVALID_CREDENTIALS_MESSAGE))?;
    Ok(redirect("/login"))
}

/// End the session.
#[get("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<HttpResponse> {
    session.clear();
    session.push_flash(FlashMessage::info(LOGGED_OUT_MESSAGE))?;
    Ok(redirect("/"))
}

#[cfg(test)]
#[path = "accounts_tests.rs"]
mod tests;
