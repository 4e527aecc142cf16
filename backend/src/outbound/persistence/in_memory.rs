//! In-memory repositories for handler tests and throwaway runs.
//!
//! Semantics match the JSON adapters (duplicate detection, id assignment,
//! note replacement) without touching the filesystem.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    LectureRepository, LectureRepositoryError, StudentNotesRepository,
    StudentNotesRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Lecture, LectureId, NewLecture, StudentNote, User, Username};

const POISONED: &str = "in-memory store lock poisoned";

fn lock<T>(mutex: &Mutex<T>) -> Option<MutexGuard<'_, T>> {
    mutex.lock().ok()
}

/// Account repository held in a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Repository pre-populated with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = lock(&self.users).ok_or_else(|| UserPersistenceError::io(POISONED))?;
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = lock(&self.users).ok_or_else(|| UserPersistenceError::io(POISONED))?;
        if users.iter().any(|u| u.username() == user.username()) {
            return Err(UserPersistenceError::duplicate(user.username().to_string()));
        }
        users.push(user.clone());
        Ok(())
    }
}

/// Lecture repository held in a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryLectureRepository {
    lectures: Mutex<Vec<Lecture>>,
}

#[async_trait]
impl LectureRepository for InMemoryLectureRepository {
    async fn list(&self) -> Result<Vec<Lecture>, LectureRepositoryError> {
        let lectures = lock(&self.lectures).ok_or_else(|| LectureRepositoryError::io(POISONED))?;
        Ok(lectures.clone())
    }

    async fn find_by_id(&self, id: LectureId) -> Result<Option<Lecture>, LectureRepositoryError> {
        let lectures = lock(&self.lectures).ok_or_else(|| LectureRepositoryError::io(POISONED))?;
        Ok(lectures.iter().find(|l| l.id() == id).cloned())
    }

    async fn create(&self, lecture: NewLecture) -> Result<Lecture, LectureRepositoryError> {
        let mut lectures =
            lock(&self.lectures).ok_or_else(|| LectureRepositoryError::io(POISONED))?;
        let id = LectureId::after_all(lectures.iter().map(Lecture::id))
            .ok_or_else(LectureRepositoryError::ids_exhausted)?;
        let lecture = lecture.into_lecture(id);
        lectures.push(lecture.clone());
        Ok(lecture)
    }
}

/// Personal notes held in a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryStudentNotesRepository {
    notes: Mutex<Vec<StudentNote>>,
}

#[async_trait]
impl StudentNotesRepository for InMemoryStudentNotesRepository {
    async fn find(
        &self,
        lecture_id: LectureId,
        username: &Username,
    ) -> Result<Option<StudentNote>, StudentNotesRepositoryError> {
        let notes = lock(&self.notes).ok_or_else(|| StudentNotesRepositoryError::io(POISONED))?;
        Ok(notes
            .iter()
            .find(|n| n.is_keyed_by(lecture_id, username))
            .cloned())
    }

    async fn save(&self, note: &StudentNote) -> Result<(), StudentNotesRepositoryError> {
        let mut notes =
            lock(&self.notes).ok_or_else(|| StudentNotesRepositoryError::io(POISONED))?;
        notes.retain(|n| !n.is_keyed_by(note.lecture_id(), note.username()));
        notes.push(note.clone());
        Ok(())
    }
}
