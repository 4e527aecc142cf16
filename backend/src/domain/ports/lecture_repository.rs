//! Driven port for lecture persistence.

use async_trait::async_trait;

use crate::domain::{Lecture, LectureId, NewLecture};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by lecture repository adapters.
    pub enum LectureRepositoryError {
        /// The backing store could not be read or written.
        Io { message: String } => "lecture store i/o failed: {message}",
        /// The stored document could not be decoded.
        Corrupt { message: String } => "lecture store is corrupt: {message}",
        /// Every identifier up to `u64::MAX` has been handed out.
        IdsExhausted => "lecture identifiers are exhausted",
    }
}

/// Lecture storage.
///
/// Identifiers are assigned by [`LectureRepository::create`] as
/// `max(existing) + 1` inside the adapter's write section, so concurrent
/// creations never share an id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LectureRepository: Send + Sync {
    /// Every stored lecture in creation order.
    async fn list(&self) -> Result<Vec<Lecture>, LectureRepositoryError>;

    /// Fetch one lecture.
    async fn find_by_id(&self, id: LectureId) -> Result<Option<Lecture>, LectureRepositoryError>;

    /// Assign the next identifier and store the lecture.
    async fn create(&self, lecture: NewLecture) -> Result<Lecture, LectureRepositoryError>;
}
