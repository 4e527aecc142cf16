//! Wire the JSON file repositories and domain services into handler state.

use std::path::Path;
use std::sync::Arc;

use mockable::DefaultClock;

use lectern::domain::{AccountService, LectureService, StudentNotesService};
use lectern::inbound::http::state::{HttpState, HttpStatePorts};
use lectern::outbound::credentials::Argon2CredentialHasher;
use lectern::outbound::persistence::{
    JsonLectureRepository, JsonStudentNotesRepository, JsonUserRepository,
};

/// Build handler state backed by the store files in `data_dir`.
///
/// One repository instance per document is shared by every worker, so the
/// per-document locks serialise all writers in the process.
pub(super) fn build_http_state(data_dir: &Path) -> HttpState {
    let users = Arc::new(JsonUserRepository::in_dir(data_dir));
    let lectures_repo = Arc::new(JsonLectureRepository::in_dir(data_dir));
    let notes_repo = Arc::new(JsonStudentNotesRepository::in_dir(data_dir));

    let accounts = AccountService::new(users, Arc::new(Argon2CredentialHasher::new()));
    let lectures = LectureService::new(lectures_repo.clone());
    let notes = StudentNotesService::new(lectures_repo, notes_repo, Arc::new(DefaultClock));

    HttpState::new(HttpStatePorts {
        login: Arc::new(accounts.clone()),
        signup: Arc::new(accounts),
        lectures: Arc::new(lectures.clone()),
        lectures_query: Arc::new(lectures.clone()),
        chat: Arc::new(lectures),
        student_notes: Arc::new(notes.clone()),
        student_notes_query: Arc::new(notes),
    })
}
