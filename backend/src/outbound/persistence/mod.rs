//! Flat-file persistence adapters.
//!
//! Each repository owns one pretty-printed JSON document inside the data
//! directory (`users.json`, `lectures.json`, `student_notes.json`).
//! Documents are created on first access and replaced atomically on every
//! write; see [`json_document`] for the locking rules.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use lectern::outbound::persistence::JsonLectureRepository;
//!
//! let lectures = JsonLectureRepository::in_dir(Path::new("./data"));
//! ```

mod in_memory;
pub mod json_document;
mod json_lecture_repository;
mod json_student_notes_repository;
mod json_user_repository;

pub use in_memory::{
    InMemoryLectureRepository, InMemoryStudentNotesRepository, InMemoryUserRepository,
};
pub use json_document::{DocumentError, JsonDocument};
pub use json_lecture_repository::{JsonLectureRepository, LECTURES_FILE};
pub use json_student_notes_repository::{JsonStudentNotesRepository, STUDENT_NOTES_FILE};
pub use json_user_repository::{JsonUserRepository, USERS_FILE};
