//! Health endpoints: liveness and readiness probes for orchestration and
//! load balancers.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

/// Readiness flag shared with the server bootstrap.
#[derive(Default)]
pub struct HealthState {
    ready: AtomicBool,
}

impl HealthState {
    /// Not ready until [`HealthState::mark_ready`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready once the listener is bound.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Whether [`HealthState::mark_ready`] has been called.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };
        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .finish()
    }
}

/// Readiness probe: 200 once the server accepts traffic, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready())
}

/// Liveness probe: 200 whenever the process can answer.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HealthState::probe_response(true)
}
