//! JSON request bodies with problem-details errors.
//!
//! Bodies are read up to [`BODY_LIMIT`] bytes (same as actix's default
//! `JsonConfig`). Anything larger is a 413, anything unparsable a 400
//! `BAD_REQUEST`. Rule checks (missing matches, player counts) stay with the
//! domain shapers; a body only has to have the right JSON types here.

use std::future::Future;
use std::ops::Deref;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_LENGTH;
use actix_web::{FromRequest, HttpRequest};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::redact;
use crate::trace_ctx;

/// Largest body accepted, in bytes.
pub const BODY_LIMIT: usize = 32 * 1024;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, AppError>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let declared = req
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());
        let path = req.path().to_string();
        let payload = payload.take();

        Box::pin(async move {
            if declared.is_some_and(|len| len > BODY_LIMIT) {
                return Err(too_large());
            }
            let body = read_body(payload).await?;
            parse_body(&body, &path).map(ValidatedJson)
        })
    }
}

async fn read_body(mut payload: Payload) -> Result<BytesMut, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(trace_id = %trace_ctx::trace_id(), error = %e, "request.body_read_failed");
            AppError::bad_request(ErrorCode::BadRequest, "Failed to read request body")
        })?;
        // chunked bodies carry no Content-Length, so check as we go
        if body.len() + chunk.len() > BODY_LIMIT {
            return Err(too_large());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

fn parse_body<T: DeserializeOwned>(body: &[u8], path: &str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(
            trace_id = %trace_ctx::trace_id(),
            path,
            body_size = body.len(),
            error = %redact(&e.to_string()),
            "request.body_invalid"
        );
        let detail = match e.classify() {
            Category::Eof if body.is_empty() => "Request body is empty".to_string(),
            Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
            Category::Syntax => format!("Invalid JSON at line {}", e.line()),
            Category::Data => "Invalid JSON: wrong types for one or more fields".to_string(),
            Category::Io => "Invalid JSON: could not read body".to_string(),
        };
        AppError::bad_request(ErrorCode::BadRequest, detail)
    })
}

fn too_large() -> AppError {
    AppError::payload_too_large(format!("Request body exceeds {BODY_LIMIT} bytes"))
}
