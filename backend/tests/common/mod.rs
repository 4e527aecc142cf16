//! Shared harness for the integration suites: a fully wired application
//! over the JSON file store in a caller-supplied directory.

use std::path::Path;
use std::sync::Arc;

use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use argon2::Params;
use mockable::DefaultClock;

use lectern::Trace;
use lectern::domain::{AccountService, LectureService, Role, StudentNotesService};
use lectern::inbound::http::pages::PageRenderer;
use lectern::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use lectern::inbound::http::state::{HttpState, HttpStatePorts};
use lectern::outbound::credentials::Argon2CredentialHasher;
use lectern::outbound::persistence::{
    JsonLectureRepository, JsonStudentNotesRepository, JsonUserRepository,
};

pub const PASSWORD: &str = "s3cret pass";

/// Handler state over the store files in `dir`.
pub fn json_state(dir: &Path) -> HttpState {
    let hasher = Argon2CredentialHasher::with_params(
        Params::new(8, 1, 1, None).expect("argon2 params"),
    );
    let accounts = AccountService::new(Arc::new(JsonUserRepository::in_dir(dir)), Arc::new(hasher));
    let lectures_repo = Arc::new(JsonLectureRepository::in_dir(dir));
    let lectures = LectureService::new(lectures_repo.clone());
    let notes = StudentNotesService::new(
        lectures_repo,
        Arc::new(JsonStudentNotesRepository::in_dir(dir)),
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

/// Application routed like the production server, with a throwaway key.
pub fn site(
    state: HttpState,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionSettings {
        key,
        cookie_secure: false,
        same_site: SameSite::Lax,
    };
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(
            PageRenderer::new().expect("templates compile"),
        ))
        .wrap(session.middleware())
        .wrap(Trace)
        .configure(lectern::inbound::http::configure)
}

pub fn location(res: &ServiceResponse) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_owned()
}

pub fn session_cookie(res: &ServiceResponse) -> Cookie<'static> {
    res.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .expect("session cookie")
        .into_owned()
}

pub async fn sign_up(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
    role: Role,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/signup")
        .set_form([
            ("username", username),
            ("password", PASSWORD),
            ("role", role.as_str()),
        ])
        .to_request();
    test::call_service(app, req).await
}

pub async fn log_in(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    username: &str,
    password: &str,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/login")
        .set_form([("username", username), ("password", password)])
        .to_request();
    test::call_service(app, req).await
}

pub async fn create_lecture(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    cookie: Cookie<'static>,
    title: &str,
    course: &str,
    transcript: &str,
) -> ServiceResponse {
    let req = test::TestRequest::post()
        .uri("/create_lecture")
        .cookie(cookie)
        .set_form([
            ("title", title),
            ("course", course),
            ("transcript", transcript),
        ])
        .to_request();
    test::call_service(app, req).await
}

pub async fn page(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    cookie: Cookie<'static>,
) -> String {
    let req = test::TestRequest::get().uri(uri).cookie(cookie).to_request();
    let res = test::call_service(app, req).await;
    let body = test::read_body(res).await;
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}
