//! Driving port for reading lectures.

use async_trait::async_trait;

use crate::domain::{Error, Lecture, LectureId, SessionUser};

/// Domain use-case port for lecture reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LecturesQuery: Send + Sync {
    /// Lectures listed on `viewer`'s dashboard: a teacher's own, or all of
    /// them for a student.
    async fn visible_lectures(&self, viewer: &SessionUser) -> Result<Vec<Lecture>, Error>;

    /// Any lecture by id; every signed-in user may open any lecture.
    async fn find_lecture(&self, id: LectureId) -> Result<Option<Lecture>, Error>;
}
