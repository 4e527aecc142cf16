//! HTTP mapping for domain errors.
//!
//! JSON endpoints return the domain [`Error`] payload with a matching
//! status code. Internal failures are redacted so store paths and parser
//! messages never reach clients; the trace id is kept for correlation.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

pub use crate::domain::ApiResult;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    error!(message = error.message(), trace_id = ?error.trace_id(), "internal error");
    let redacted = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => redacted.with_trace_id(id.to_owned()),
        None => redacted,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

/// `JsonConfig` error handler rendering body failures as `invalid_request`.
pub fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}
