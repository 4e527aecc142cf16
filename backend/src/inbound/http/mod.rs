//! HTTP inbound adapter: server-rendered pages, the JSON API used by the
//! browser script, and health probes.
//!
//! Handlers depend on domain ports through [`state::HttpState`] and on the
//! compiled templates through [`pages::PageRenderer`]; both are registered
//! as `web::Data` by the server.

pub mod accounts;
pub mod assets;
pub mod chat;
pub mod error;
pub mod flash;
pub mod health;
pub mod lectures;
pub mod pages;
pub mod session;
pub mod session_config;
pub mod state;
pub mod student_notes;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

use crate::domain::NOTE_CONTENT_MAX_BYTES;

pub use error::ApiResult;

/// Largest JSON body accepted. Leaves room for escaping on top of the
/// largest note body.
pub const JSON_BODY_LIMIT: usize = 2 * NOTE_CONTENT_MAX_BYTES;
/// Largest urlencoded form accepted; bounds lecture transcripts.
pub const FORM_BODY_LIMIT: usize = NOTE_CONTENT_MAX_BYTES;

/// Register every page and API route.
///
/// Health probes are registered separately so they stay outside the
/// session middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
///
/// let app = App::new().configure(lectern::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_BODY_LIMIT)
            .error_handler(error::json_payload_error),
    )
    .app_data(web::FormConfig::default().limit(FORM_BODY_LIMIT))
    .service(accounts::index)
    .service(accounts::signup_form)
    .service(accounts::signup)
    .service(accounts::login_form)
    .service(accounts::login)
    .service(accounts::logout)
    .service(lectures::dashboard)
    .service(lectures::create_lecture)
    .service(lectures::lecture_page)
    .service(chat::ask)
    .service(student_notes::load_notes)
    .service(student_notes::save_notes)
    .service(assets::main_js);
}
