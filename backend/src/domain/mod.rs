//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers, plus the services that implement the driving ports in
//! [`ports`]. Types validate on construction and document their
//! serialisation contracts (serde) in Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - User, Username, Role, SessionUser: accounts and session identity.
//! - Lecture, LectureDraft, NewLecture, LectureId: lecture records.
//! - StudentNote, NoteContent: personal notes per user and lecture.
//! - AccountService, LectureService, StudentNotesService: port
//!   implementations.

pub mod account_service;
pub mod auth;
pub mod chat;
pub mod error;
pub mod lecture;
pub mod lecture_service;
pub mod notes;
pub mod ports;
pub mod student_note;
pub mod student_notes_service;
pub mod trace_id;
pub mod user;

pub use self::account_service::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, SignupRequest, SignupValidationError,
};
pub use self::chat::{ChatAnswer, ChatQuestion, EMPTY_QUESTION_REPLY, LECTURE_NOT_FOUND_REPLY};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::lecture::{Lecture, LectureDraft, LectureDraftError, LectureId, NewLecture};
pub use self::lecture_service::LectureService;
pub use self::notes::{NOTES_HEADING, generate_notes};
pub use self::student_note::{NOTE_CONTENT_MAX_BYTES, NoteContent, NoteContentError, StudentNote};
pub use self::student_notes_service::StudentNotesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{PasswordHash, Role, SessionUser, User, UserValidationError, Username};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use lectern::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
