//! Driving port for reading personal notes.

use async_trait::async_trait;

use crate::domain::{Error, LectureId, SessionUser, StudentNote};

/// Domain use-case port for note reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentNotesQuery: Send + Sync {
    /// `owner`'s note on `lecture_id`, if one was saved.
    async fn load_note(
        &self,
        owner: &SessionUser,
        lecture_id: LectureId,
    ) -> Result<Option<StudentNote>, Error>;
}
