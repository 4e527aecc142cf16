//! Lecture data model.
//!
//! A lecture is authored once by a teacher and never edited. Its `notes`
//! are derived from the transcript at creation time and stored alongside it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Role, SessionUser, Username, notes::generate_notes};

/// Store-assigned lecture identifier (`max(existing) + 1`, starting at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LectureId(u64);

impl LectureId {
    /// The identifier handed to the first lecture in an empty store.
    pub const FIRST: Self = Self(1);

    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Identifier following this one; `None` at `u64::MAX`.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Identifier for a lecture added after `existing`: one past the
    /// largest, or [`Self::FIRST`] when there are none.
    pub fn after_all(existing: impl IntoIterator<Item = Self>) -> Option<Self> {
        match existing.into_iter().max() {
            Some(largest) => largest.next(),
            None => Some(Self::FIRST),
        }
    }
}

impl fmt::Display for LectureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LectureId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Validation errors for a lecture submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LectureDraftError {
    /// Title missing or blank.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Course missing or blank.
    #[error("course must not be empty")]
    EmptyCourse,
    /// Transcript missing or blank.
    #[error("transcript must not be empty")]
    EmptyTranscript,
}

/// Teacher-supplied lecture fields, trimmed and checked for presence.
///
/// # Examples
/// ```
/// use lectern::domain::{LectureDraft, LectureDraftError};
///
/// let draft = LectureDraft::try_from_parts(" Intro ", "CS101", "Hello. World.").unwrap();
/// assert_eq!(draft.title(), "Intro");
///
/// let err = LectureDraft::try_from_parts("Intro", "  ", "Hello.").unwrap_err();
/// assert_eq!(err, LectureDraftError::EmptyCourse);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureDraft {
    title: String,
    course: String,
    transcript: String,
}

impl LectureDraft {
    /// Validate raw form inputs.
    pub fn try_from_parts(
        title: &str,
        course: &str,
        transcript: &str,
    ) -> Result<Self, LectureDraftError> {
        let title = non_blank(title).ok_or(LectureDraftError::EmptyTitle)?;
        let course = non_blank(course).ok_or(LectureDraftError::EmptyCourse)?;
        let transcript = non_blank(transcript).ok_or(LectureDraftError::EmptyTranscript)?;
        Ok(Self {
            title,
            course,
            transcript,
        })
    }

    /// Lecture title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Course the lecture belongs to.
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Raw transcript text.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// A lecture ready for storage, minus the identifier the store assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLecture {
    draft: LectureDraft,
    notes: String,
    created_by: Username,
}

impl NewLecture {
    /// Derive notes from the draft's transcript and stamp the author.
    pub fn from_draft(draft: LectureDraft, created_by: Username) -> Self {
        let notes = generate_notes(draft.transcript());
        Self {
            draft,
            notes,
            created_by,
        }
    }

    /// Attach the store-assigned identifier.
    pub fn into_lecture(self, id: LectureId) -> Lecture {
        let Self {
            draft,
            notes,
            created_by,
        } = self;
        Lecture {
            id,
            title: draft.title,
            course: draft.course,
            transcript: draft.transcript,
            notes,
            created_by,
        }
    }
}

/// Stored lecture record.
///
/// Serialises with the persisted field names
/// (`id, title, course, transcript, notes, created_by`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecture {
    id: LectureId,
    title: String,
    course: String,
    transcript: String,
    notes: String,
    created_by: Username,
}

impl Lecture {
    /// Store-assigned identifier.
    pub fn id(&self) -> LectureId {
        self.id
    }

    /// Lecture title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Course the lecture belongs to.
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Raw transcript text.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Notes derived at creation time.
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Author's username.
    pub fn created_by(&self) -> &Username {
        &self.created_by
    }

    /// Dashboard visibility: teachers see their own lectures, students see
    /// everything.
    pub fn is_listed_for(&self, viewer: &SessionUser) -> bool {
        match viewer.role() {
            Role::Teacher => &self.created_by == viewer.username(),
            Role::Student => true,
        }
    }
}
