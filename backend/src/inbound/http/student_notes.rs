//! Personal notes API handlers.
//!
//! ```text
//! GET  /api/lecture/3/notes
//! POST /api/lecture/3/notes {"notes":"<p>my notes</p>"}
//! ```
//!
//! Notes are private: both endpoints act on the signed-in user's own note.

use actix_web::{get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, LectureId, NoteContent, NoteContentError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SignedIn;
use crate::inbound::http::state::HttpState;

/// Saved notes for the current user, `null` when nothing was saved yet.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct NotesResponse {
    /// Saved note body, `null` before the first save.
    pub notes: Option<String>,
}

/// Note body to store. Content is kept verbatim.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct SaveNotesRequest {
    /// Note body to store.
    #[serde(default)]
    pub notes: String,
}

/// Save confirmation.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveNotesResponse {
    /// Always `true` on success.
    pub saved: bool,
    /// Time the notes were stored.
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

fn map_note_content_error(err: NoteContentError) -> Error {
    match err {
        NoteContentError::TooLarge { max, actual } => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "notes", "code": "too_large", "max": max, "actual": actual })),
    }
}

/// Load the signed-in user's notes on a lecture.
#[utoipa::path(
    get,
    path = "/api/lecture/{lecture_id}/notes",
    params(("lecture_id" = u64, Path, description = "Lecture identifier")),
    responses(
        (status = 200, description = "Saved notes or null", body = NotesResponse),
        (status = 401, description = "Not signed in", body = Error),
        (status = 404, description = "Unknown lecture", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notes"],
    operation_id = "loadNotes"
)]
#[get("/api/lecture/{lecture_id}/notes")]
pub async fn load_notes(
    SignedIn(user): SignedIn,
    state: web::Data<HttpState>,
    path: web::Path<LectureId>,
) -> ApiResult<web::Json<NotesResponse>> {
    let note = state
        .student_notes_query
        .load_note(&user, path.into_inner())
        .await?;
    Ok(web::Json(NotesResponse {
        notes: note.map(|n| n.content().as_ref().to_owned()),
    }))
}

/// Replace the signed-in user's notes on a lecture.
#[utoipa::path(
    post,
    path = "/api/lecture/{lecture_id}/notes",
    params(("lecture_id" = u64, Path, description = "Lecture identifier")),
    request_body = SaveNotesRequest,
    responses(
        (status = 200, description = "Notes stored", body = SaveNotesResponse),
        (status = 400, description = "Malformed or oversized body", body = Error),
        (status = 401, description = "Not signed in", body = Error),
        (status = 404, description = "Unknown lecture", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notes"],
    operation_id = "saveNotes"
)]
#[post("/api/lecture/{lecture_id}/notes")]
pub async fn save_notes(
    SignedIn(user): SignedIn,
    state: web::Data<HttpState>,
    path: web::Path<LectureId>,
    payload: web::Json<SaveNotesRequest>,
) -> ApiResult<web::Json<SaveNotesResponse>> {
    let content = NoteContent::new(payload.into_inner().notes).map_err(map_note_content_error)?;
    let note = state
        .student_notes
        .save_note(&user, path.into_inner(), content)
        .await?;
    Ok(web::Json(SaveNotesResponse {
        saved: true,
        updated_at: note.updated_at(),
    }))
}
