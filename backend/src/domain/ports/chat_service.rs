//! Driving port for the lecture chatbot.

use async_trait::async_trait;

use crate::domain::{ChatAnswer, Error, LectureId};

/// Domain use-case port answering questions about a lecture.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Answer `question` about `lecture_id`.
    ///
    /// Blank questions and unknown lectures are answered with apology text,
    /// not errors; only store failures produce `Err`.
    async fn answer(&self, lecture_id: LectureId, question: &str) -> Result<ChatAnswer, Error>;
}
