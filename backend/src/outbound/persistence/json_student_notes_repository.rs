//! `student_notes.json` adapter for [`StudentNotesRepository`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::json_document::{DocumentError, JsonDocument};
use crate::domain::ports::{StudentNotesRepository, StudentNotesRepositoryError};
use crate::domain::{LectureId, StudentNote, Username};

/// File name used inside the data directory.
pub const STUDENT_NOTES_FILE: &str = "student_notes.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct NotesDocument {
    notes: Vec<StudentNote>,
}

impl From<DocumentError> for StudentNotesRepositoryError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::Io { .. } => Self::io(error.to_string()),
            DocumentError::Corrupt { .. } => Self::corrupt(error.to_string()),
        }
    }
}

/// Personal notes persisted as `{"notes": [...]}`.
#[derive(Debug)]
pub struct JsonStudentNotesRepository {
    document: JsonDocument<NotesDocument>,
}

impl JsonStudentNotesRepository {
    /// Repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Repository backed by [`STUDENT_NOTES_FILE`] inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STUDENT_NOTES_FILE))
    }
}

#[async_trait]
impl StudentNotesRepository for JsonStudentNotesRepository {
    async fn find(
        &self,
        lecture_id: LectureId,
        username: &Username,
    ) -> Result<Option<StudentNote>, StudentNotesRepositoryError> {
        let document = self.document.read().await?;
        Ok(document
            .notes
            .into_iter()
            .find(|note| note.is_keyed_by(lecture_id, username)))
    }

    async fn save(&self, note: &StudentNote) -> Result<(), StudentNotesRepositoryError> {
        self.document
            .update(|document| {
                document
                    .notes
                    .retain(|existing| !existing.is_keyed_by(note.lecture_id(), note.username()));
                document.notes.push(note.clone());
                Ok(())
            })
            .await
    }
}
