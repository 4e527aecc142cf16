//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] covers the JSON endpoints used by the browser script (chat
//! and personal notes) plus the health probes. HTML pages are not part of
//! the document.
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::chat::{ChatRequest, ChatResponse};
use crate::inbound::http::student_notes::{NotesResponse, SaveNotesRequest, SaveNotesResponse};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Lectern API",
        description = "JSON endpoints behind the lecture pages: chat and personal notes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::chat::ask,
        crate::inbound::http::student_notes::load_notes,
        crate::inbound::http::student_notes::save_notes,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        ChatRequest,
        ChatResponse,
        NotesResponse,
        SaveNotesRequest,
        SaveNotesResponse
    )),
    tags(
        (name = "chat", description = "Questions about a lecture"),
        (name = "notes", description = "Personal notes on a lecture"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
