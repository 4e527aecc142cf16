//! Lecture domain services: authoring, listing and the chat stub.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    ChatService, LectureRepository, LectureRepositoryError, LecturesCommand, LecturesQuery,
    TEACHERS_ONLY_MESSAGE,
};
use crate::domain::{
    ChatAnswer, ChatQuestion, Error, Lecture, LectureDraft, LectureId, NewLecture, SessionUser,
};

pub(crate) fn map_lecture_repository_error(error: LectureRepositoryError) -> Error {
    match error {
        LectureRepositoryError::Io { message } => {
            Error::internal(format!("lecture store i/o failed: {message}"))
        }
        LectureRepositoryError::Corrupt { message } => {
            Error::internal(format!("lecture store error: {message}"))
        }
        LectureRepositoryError::IdsExhausted => Error::internal("lecture identifiers are exhausted"),
    }
}

/// Lecture service implementing the lecture and chat driving ports.
pub struct LectureService<L> {
    lectures: Arc<L>,
}

impl<L> Clone for LectureService<L> {
    fn clone(&self) -> Self {
        Self {
            lectures: Arc::clone(&self.lectures),
        }
    }
}

impl<L> LectureService<L> {
    /// Create a service over the lecture repository.
    pub fn new(lectures: Arc<L>) -> Self {
        Self { lectures }
    }
}

#[async_trait]
impl<L> LecturesCommand for LectureService<L>
where
    L: LectureRepository,
{
    async fn create_lecture(
        &self,
        author: &SessionUser,
        draft: LectureDraft,
    ) -> Result<Lecture, Error> {
        if !author.role().can_author_lectures() {
            return Err(Error::forbidden(TEACHERS_ONLY_MESSAGE));
        }

        let lecture = self
            .lectures
            .create(NewLecture::from_draft(draft, author.username().clone()))
            .await
            .map_err(map_lecture_repository_error)?;
        info!(lecture_id = %lecture.id(), author = %author.username(), "lecture created");
        Ok(lecture)
    }
}

#[async_trait]
impl<L> LecturesQuery for LectureService<L>
where
    L: LectureRepository,
{
    async fn visible_lectures(&self, viewer: &SessionUser) -> Result<Vec<Lecture>, Error> {
        let all = self
            .lectures
            .list()
            .await
            .map_err(map_lecture_repository_error)?;
        Ok(all
            .into_iter()
            .filter(|lecture| lecture.is_listed_for(viewer))
            .collect())
    }

    async fn find_lecture(&self, id: LectureId) -> Result<Option<Lecture>, Error> {
        self.lectures
            .find_by_id(id)
            .await
            .map_err(map_lecture_repository_error)
    }
}

#[async_trait]
impl<L> ChatService for LectureService<L>
where
    L: LectureRepository,
{
    async fn answer(&self, lecture_id: LectureId, question: &str) -> Result<ChatAnswer, Error> {
        let Some(question) = ChatQuestion::parse(question) else {
            return Ok(ChatAnswer::empty_question());
        };

        let answer = match self.find_lecture(lecture_id).await? {
            Some(lecture) => ChatAnswer::for_lecture(&lecture, &question),
            None => ChatAnswer::lecture_not_found(),
        };
        Ok(answer)
    }
}

#[cfg(test)]
#[path = "lecture_service_tests.rs"]
mod tests;
