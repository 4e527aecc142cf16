//! Driving port for authoring lectures.

use async_trait::async_trait;

use crate::domain::{Error, Lecture, LectureDraft, SessionUser};

/// Message shown when a non-teacher tries to author a lecture.
pub const TEACHERS_ONLY_MESSAGE: &str = "Only teachers can create lectures.";

/// Domain use-case port for lecture creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LecturesCommand: Send + Sync {
    /// Derive notes for `draft` and store it under `author`.
    ///
    /// Students are refused with [`crate::domain::ErrorCode::Forbidden`].
    async fn create_lecture(
        &self,
        author: &SessionUser,
        draft: LectureDraft,
    ) -> Result<Lecture, Error>;
}
