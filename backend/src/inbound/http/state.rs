//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ChatService, LecturesCommand, LecturesQuery, LoginService, SignupService,
    StudentNotesCommand, StudentNotesQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    /// Credential check.
    pub login: Arc<dyn LoginService>,
    /// Account creation.
    pub signup: Arc<dyn SignupService>,
    /// Lecture authoring.
    pub lectures: Arc<dyn LecturesCommand>,
    /// Lecture listing and lookup.
    pub lectures_query: Arc<dyn LecturesQuery>,
    /// Canned chat replies.
    pub chat: Arc<dyn ChatService>,
    /// Personal notes writes.
    pub student_notes: Arc<dyn StudentNotesCommand>,
    /// Personal notes reads.
    pub student_notes_query: Arc<dyn StudentNotesQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check.
    pub login: Arc<dyn LoginService>,
    /// Account creation.
    pub signup: Arc<dyn SignupService>,
    /// Lecture authoring.
    pub lectures: Arc<dyn LecturesCommand>,
    /// Lecture listing and lookup.
    pub lectures_query: Arc<dyn LecturesQuery>,
    /// Canned chat replies.
    pub chat: Arc<dyn ChatService>,
    /// Personal notes writes.
    pub student_notes: Arc<dyn StudentNotesCommand>,
    /// Personal notes reads.
    pub student_notes_query: Arc<dyn StudentNotesQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use lectern::domain::{AccountService, LectureService, StudentNotesService};
    /// use lectern::inbound::http::state::{HttpState, HttpStatePorts};
    /// use lectern::outbound::credentials::Argon2CredentialHasher;
    /// use lectern::outbound::persistence::{
    ///     InMemoryLectureRepository, InMemoryStudentNotesRepository, InMemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let accounts = AccountService::new(
    ///     Arc::new(InMemoryUserRepository::default()),
    ///     Arc::new(Argon2CredentialHasher::new()),
    /// );
    /// let lectures_repo = Arc::new(InMemoryLectureRepository::default());
    /// let lectures = LectureService::new(lectures_repo.clone());
    /// let notes = StudentNotesService::new(
    ///     lectures_repo,
    ///     Arc::new(InMemoryStudentNotesRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let state = HttpState::new(HttpStatePorts {
    ///     login: Arc::new(accounts.clone()),
    ///     signup: Arc::new(accounts),
    ///     lectures: Arc::new(lectures.clone()),
    ///     lectures_query: Arc::new(lectures.clone()),
    ///     chat: Arc::new(lectures),
    ///     student_notes: Arc::new(notes.clone()),
    ///     student_notes_query: Arc::new(notes),
    /// });
    /// let _chat = state.chat.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            signup,
            lectures,
            lectures_query,
            chat,
            student_notes,
            student_notes_query,
        } = ports;
        Self {
            login,
            signup,
            lectures,
            lectures_query,
            chat,
            student_notes,
            student_notes_query,
        }
    }
}
