//! Personal notes a signed-in user keeps on a lecture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{LectureId, Username};

/// Largest note body accepted, in bytes.
pub const NOTE_CONTENT_MAX_BYTES: usize = 5 * 1024 * 1024;

/// Validation errors for note bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NoteContentError {
    /// Body exceeded [`NOTE_CONTENT_MAX_BYTES`].
    #[error("notes must be at most {max} bytes, got {actual}")]
    TooLarge {
        /// Configured ceiling.
        max: usize,
        /// Submitted size.
        actual: usize,
    },
}

/// Note body stored verbatim; the front-end owns its format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteContent(String);

impl NoteContent {
    /// Check the size ceiling.
    pub fn new(raw: impl Into<String>) -> Result<Self, NoteContentError> {
        let raw = raw.into();
        if raw.len() > NOTE_CONTENT_MAX_BYTES {
            return Err(NoteContentError::TooLarge {
                max: NOTE_CONTENT_MAX_BYTES,
                actual: raw.len(),
            });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for NoteContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One user's notes on one lecture; saving replaces the previous body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentNote {
    lecture_id: LectureId,
    username: Username,
    content: NoteContent,
    updated_at: DateTime<Utc>,
}

impl StudentNote {
    /// Build a note stamped at `updated_at`.
    pub fn new(
        lecture_id: LectureId,
        username: Username,
        content: NoteContent,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            lecture_id,
            username,
            content,
            updated_at,
        }
    }

    /// Lecture the note belongs to.
    pub fn lecture_id(&self) -> LectureId {
        self.lecture_id
    }

    /// Owner of the note.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Note body.
    pub fn content(&self) -> &NoteContent {
        &self.content
    }

    /// Last save time.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether this note is the one keyed by `(lecture_id, username)`.
    pub fn is_keyed_by(&self, lecture_id: LectureId, username: &Username) -> bool {
        self.lecture_id == lecture_id && &self.username == username
    }
}
