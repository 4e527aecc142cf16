//! Front-end script served from memory.

use actix_web::http::header;
use actix_web::{HttpResponse, get};

const MAIN_JS: &str = include_str!("../../../static/js/main.js");

/// Browser script for chat, transcript toggling and personal notes.
#[get("/static/js/main.js")]
pub async fn main_js() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .body(MAIN_JS)
}
