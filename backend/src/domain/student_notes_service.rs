//! Personal notes domain services.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::debug;

use crate::domain::lecture_service::map_lecture_repository_error;
use crate::domain::ports::{
    LectureRepository, StudentNotesCommand, StudentNotesQuery, StudentNotesRepository,
    StudentNotesRepositoryError,
};
use crate::domain::{Error, LectureId, NoteContent, SessionUser, StudentNote};

fn map_notes_repository_error(error: StudentNotesRepositoryError) -> Error {
    match error {
        StudentNotesRepositoryError::Io { message } => {
            Error::internal(format!("notes store i/o failed: {message}"))
        }
        StudentNotesRepositoryError::Corrupt { message } => {
            Error::internal(format!("notes store error: {message}"))
        }
    }
}

/// Notes service implementing the personal notes driving ports.
///
/// Notes may only be attached to lectures that exist; reads for a missing
/// lecture are refused the same way.
pub struct StudentNotesService<L, N> {
    lectures: Arc<L>,
    notes: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<L, N> Clone for StudentNotesService<L, N> {
    fn clone(&self) -> Self {
        Self {
            lectures: Arc::clone(&self.lectures),
            notes: Arc::clone(&self.notes),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<L, N> StudentNotesService<L, N> {
    /// Create a service stamping saves with `clock`.
    pub fn new(lectures: Arc<L>, notes: Arc<N>, clock: Arc<dyn Clock>) -> Self {
        Self {
            lectures,
            notes,
            clock,
        }
    }
}

impl<L, N> StudentNotesService<L, N>
where
    L: LectureRepository,
{
    async fn ensure_lecture_exists(&self, lecture_id: LectureId) -> Result<(), Error> {
        self.lectures
            .find_by_id(lecture_id)
            .await
            .map_err(map_lecture_repository_error)?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("lecture {lecture_id} not found")))
    }
}

#[async_trait]
impl<L, N> StudentNotesCommand for StudentNotesService<L, N>
where
    L: LectureRepository,
    N: StudentNotesRepository,
{
    async fn save_note(
        &self,
        owner: &SessionUser,
        lecture_id: LectureId,
        content: NoteContent,
    ) -> Result<StudentNote, Error> {
        self.ensure_lecture_exists(lecture_id).await?;

        let note = StudentNote::new(
            lecture_id,
            owner.username().clone(),
            content,
            self.clock.utc(),
        );
        self.notes
            .save(&note)
            .await
            .map_err(map_notes_repository_error)?;
        debug!(%lecture_id, username = %owner.username(), "notes saved");
        Ok(note)
    }
}

#[async_trait]
impl<L, N> StudentNotesQuery for StudentNotesService<L, N>
where
    L: LectureRepository,
    N: StudentNotesRepository,
{
    async fn load_note(
        &self,
        owner: &SessionUser,
        lecture_id: LectureId,
    ) -> Result<Option<StudentNote>, Error> {
        self.ensure_lecture_exists(lecture_id).await?;
        self.notes
            .find(lecture_id, owner.username())
            .await
            .map_err(map_notes_repository_error)
    }
}

#[cfg(test)]
#[path = "student_notes_service_tests.rs"]
mod tests;
