//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod chat_service;
mod credential_hasher;
mod lecture_repository;
mod lectures_command;
mod lectures_query;
mod login_service;
mod signup_service;
mod student_notes_command;
mod student_notes_query;
mod student_notes_repository;
mod user_repository;

#[cfg(test)]
pub use chat_service::MockChatService;
pub use chat_service::ChatService;
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
#[cfg(test)]
pub use lecture_repository::MockLectureRepository;
pub use lecture_repository::{LectureRepository, LectureRepositoryError};
#[cfg(test)]
pub use lectures_command::MockLecturesCommand;
pub use lectures_command::{LecturesCommand, TEACHERS_ONLY_MESSAGE};
#[cfg(test)]
pub use lectures_query::MockLecturesQuery;
pub use lectures_query::LecturesQuery;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{INVALID_CREDENTIALS_MESSAGE, LoginService};
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::{SignupService, USERNAME_TAKEN_MESSAGE};
#[cfg(test)]
pub use student_notes_command::MockStudentNotesCommand;
pub use student_notes_command::StudentNotesCommand;
#[cfg(test)]
pub use student_notes_query::MockStudentNotesQuery;
pub use student_notes_query::StudentNotesQuery;
#[cfg(test)]
pub use student_notes_repository::MockStudentNotesRepository;
pub use student_notes_repository::{StudentNotesRepository, StudentNotesRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
