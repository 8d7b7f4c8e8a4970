//! Per-request trace id.
//!
//! Generates a UUID v4 for every request and makes it visible three ways:
//! - `TraceId` in the request extensions (read by `StructuredLogger`),
//! - the task-local [`crate::trace_ctx`] (read by error rendering and
//!   store error logging),
//! - a `request` span around the downstream future, so every log line
//!   emitted while serving the request carries `trace_id`.
//!
//! Responses get `x-request-id` and, unless an error body already set it,
//! `x-trace-id`.
//!
//! Ordering: wrap this outside `StructuredLogger`:
//!
//! App::new()
//!     .wrap(StructuredLogger)
//!     .wrap(RequestTrace)

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use crate::trace_ctx;

/// Trace id stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let span = info_span!(
            "request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path()
        );

        // The downstream future is created here but only polled inside the
        // scope below, which is where handlers run.
        let fut = self.service.call(req);
        let scoped = trace_ctx::with_trace_id(trace_id.clone(), fut).instrument(span);

        Box::pin(async move {
            let mut res = scoped.await?;

            let value = HeaderValue::from_str(&trace_id)
                .unwrap_or_else(|_| HeaderValue::from_static("invalid-uuid"));
            let headers = res.headers_mut();
            let x_trace_id = HeaderName::from_static("x-trace-id");
            if !headers.contains_key(&x_trace_id) {
                headers.insert(x_trace_id, value.clone());
            }
            headers.insert(HeaderName::from_static("x-request-id"), value);

            Ok(res)
        })
    }
}
