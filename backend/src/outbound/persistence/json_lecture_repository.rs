//! `lectures.json` adapter for [`LectureRepository`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::json_document::{DocumentError, JsonDocument};
use crate::domain::ports::{LectureRepository, LectureRepositoryError};
use crate::domain::{Lecture, LectureId, NewLecture};

/// File name used inside the data directory.
pub const LECTURES_FILE: &str = "lectures.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct LecturesDocument {
    lectures: Vec<Lecture>,
}

impl LecturesDocument {
    fn next_id(&self) -> Result<LectureId, LectureRepositoryError> {
        LectureId::after_all(self.lectures.iter().map(Lecture::id))
            .ok_or_else(LectureRepositoryError::ids_exhausted)
    }
}

impl From<DocumentError> for LectureRepositoryError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::Io { .. } => Self::io(error.to_string()),
            DocumentError::Corrupt { .. } => Self::corrupt(error.to_string()),
        }
    }
}

/// Lecture repository persisted as `{"lectures": [...]}`.
#[derive(Debug)]
pub struct JsonLectureRepository {
    document: JsonDocument<LecturesDocument>,
}

impl JsonLectureRepository {
    /// Repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Repository backed by [`LECTURES_FILE`] inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(LECTURES_FILE))
    }
}

#[async_trait]
impl LectureRepository for JsonLectureRepository {
    async fn list(&self) -> Result<Vec<Lecture>, LectureRepositoryError> {
        Ok(self.document.read().await?.lectures)
    }

    async fn find_by_id(&self, id: LectureId) -> Result<Option<Lecture>, LectureRepositoryError> {
        let document = self.document.read().await?;
        Ok(document.lectures.into_iter().find(|l| l.id() == id))
    }

    async fn create(&self, lecture: NewLecture) -> Result<Lecture, LectureRepositoryError> {
        self.document
            .update(move |document| {
                let lecture = lecture.into_lecture(document.next_id()?);
                document.lectures.push(lecture.clone());
                Ok(lecture)
            })
            .await
    }
}
