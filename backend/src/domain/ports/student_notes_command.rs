//! Driving port for saving personal notes.

use async_trait::async_trait;

use crate::domain::{Error, LectureId, NoteContent, SessionUser, StudentNote};

/// Domain use-case port for note writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentNotesCommand: Send + Sync {
    /// Replace `owner`'s note on `lecture_id`.
    ///
    /// Unknown lectures yield [`crate::domain::ErrorCode::NotFound`].
    async fn save_note(
        &self,
        owner: &SessionUser,
        lecture_id: LectureId,
        content: NoteContent,
    ) -> Result<StudentNote, Error>;
}
