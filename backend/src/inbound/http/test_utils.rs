//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use argon2::Params;
use mockable::DefaultClock;

use crate::Trace;
use crate::domain::{AccountService, LectureService, Role, StudentNotesService};
use crate::inbound::http::pages::PageRenderer;
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::credentials::Argon2CredentialHasher;
use crate::outbound::persistence::{
    InMemoryLectureRepository, InMemoryStudentNotesRepository, InMemoryUserRepository,
};

/// Password used by [`sign_in`].
pub const TEST_PASSWORD: &str = "correct horse";

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// Session cookie set by `res`.
///
/// # Panics
/// When the response did not touch the session.
pub fn session_cookie<B>(res: &ServiceResponse<B>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .expect("session cookie")
        .into_owned()
}

/// Session cookie set by `res`, or `previous` when the session was left
/// unchanged.
pub fn updated_cookie<B>(res: &ServiceResponse<B>, previous: Cookie<'static>) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
        .unwrap_or(previous)
}

/// `Location` header of a redirect.
pub fn location<B>(res: &ServiceResponse<B>) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_owned()
}

/// Argon2 with minimal cost so tests stay fast.
pub fn fast_hasher() -> Argon2CredentialHasher {
    Argon2CredentialHasher::with_params(Params::new(8, 1, 1, None).expect("argon2 params"))
}

/// Handler state backed by in-memory repositories.
pub fn in_memory_state() -> HttpState {
    let accounts = AccountService::new(
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(fast_hasher()),
    );
    let lectures_repo = Arc::new(InMemoryLectureRepository::default());
    let lectures = LectureService::new(lectures_repo.clone());
    let notes = StudentNotesService::new(
        lectures_repo,
        Arc::new(InMemoryStudentNotesRepository::default()),
        Arc::new(DefaultClock),
    );
    HttpState::new(HttpStatePorts {
        login: Arc::new(accounts.clone()),
        signup: Arc::new(accounts),
        lectures: Arc::new(lectures.clone()),
        lectures_query: Arc::new(lectures.clone()),
        chat: Arc::new(lectures),
        student_notes: Arc::new(notes.clone()),
        student_notes_query: Arc::new(notes),
    })
}

/// Fully routed application around `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(
            PageRenderer::new().expect("templates compile"),
        ))
        .wrap(test_session_middleware())
        .wrap(Trace)
        .configure(super::configure)
}

/// Sign `username` up with `role` and log in; returns the session cookie.
pub async fn sign_in(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
    username: &str,
    role: Role,
) -> Cookie<'static> {
    let signup = test::TestRequest::post()
        .uri("/signup")
        .set_form([
            ("username", username),
            ("password", TEST_PASSWORD),
            ("role", role.as_str()),
        ])
        .to_request();
    let res = test::call_service(app, signup).await;
    assert_eq!(location(&res), "/login", "signup for {username} failed");

    let login = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", username), ("password", TEST_PASSWORD)])
        .to_request();
    let res = test::call_service(app, login).await;
    assert_eq!(location(&res), "/dashboard", "login for {username} failed");
    session_cookie(&res)
}

/// GET `uri` with `cookie` and return the status and body text.
pub async fn get_page(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = actix_web::Error,
    >,
    uri: &str,
    cookie: Option<Cookie<'static>>,
) -> (actix_web::http::StatusCode, String) {
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(cookie) = cookie {
        req = req.cookie(cookie);
    }
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (
        status,
        String::from_utf8(body.to_vec()).expect("utf-8 body"),
    )
}
