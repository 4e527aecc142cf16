//! Request-scoped correlation identifier.
//!
//! The [`crate::middleware::Trace`] middleware puts a fresh [`TraceId`] in
//! task-local storage for every request, so domain errors created while a
//! handler runs pick it up without threading it through every call.
//!
//! Task-locals do not follow `tokio::spawn`; wrap spawned work in
//! [`TraceId::scope`] to carry the identifier along.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Per-request trace identifier.
///
/// # Examples
/// ```
/// use lectern::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
///     .parse()
///     .expect("valid UUID");
/// let observed = TraceId::scope(trace_id, async move { TraceId::current() }).await;
/// assert_eq!(observed, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a new random trace identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// The identifier in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        TRACE_ID.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }

    /// Run the synchronous closure `f` with `trace_id` in scope.
    pub fn sync_scope<F, R>(trace_id: Self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        TRACE_ID.sync_scope(trace_id, f)
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
