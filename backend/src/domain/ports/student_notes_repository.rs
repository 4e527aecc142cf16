//! Driven port for personal lecture notes.

use async_trait::async_trait;

use crate::domain::{LectureId, StudentNote, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student notes adapters.
    pub enum StudentNotesRepositoryError {
        /// The backing store could not be read or written.
        Io { message: String } => "notes store i/o failed: {message}",
        /// The stored document could not be decoded.
        Corrupt { message: String } => "notes store is corrupt: {message}",
    }
}

/// Storage keyed by `(lecture_id, username)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentNotesRepository: Send + Sync {
    /// Fetch the note for one user on one lecture.
    async fn find(
        &self,
        lecture_id: LectureId,
        username: &Username,
    ) -> Result<Option<StudentNote>, StudentNotesRepositoryError>;

    /// Insert or replace the note under its key.
    async fn save(&self, note: &StudentNote) -> Result<(), StudentNotesRepositoryError>;
}
