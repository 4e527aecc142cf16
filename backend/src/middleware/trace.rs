//! Request tracing middleware.
//!
//! Every request runs inside a [`TraceId`] scope and a `request` span, so
//! domain errors and log lines emitted while handling it share one
//! identifier. The identifier is echoed back in the `trace-id` header.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, error, info, info_span};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware assigning a fresh trace identifier to each request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use lectern::middleware::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let span = info_span!(
            "request",
            %trace_id,
            method = %req.method(),
            path = %req.path(),
        );
        let started = Instant::now();
        let fut = TraceId::sync_scope(trace_id, || self.service.call(req));

        Box::pin(
            TraceId::scope(trace_id, async move {
                let mut res = fut.await?;
                info!(
                    status = res.status().as_u16(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "request completed"
                );
                match HeaderValue::from_str(&trace_id.to_string()) {
                    Ok(value) => {
                        res.response_mut()
                            .headers_mut()
                            .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                    }
                    Err(error) => {
                        error!(%error, "failed to encode trace identifier header");
                    }
                }
                Ok(res)
            })
            .instrument(span),
        )
    }
}
