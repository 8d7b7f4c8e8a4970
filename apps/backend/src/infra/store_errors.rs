//! StoreError -> DomainError translation.
//!
//! Repos call [`map_store_err`] on every store failure; higher layers then
//! turn the `DomainError` into an `AppError` with an operation-specific
//! message.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, StoreErrorKind, ValidationKind};
use crate::logging::pii::redact;
use crate::store::StoreError;
use crate::trace_ctx;

/// Translate a `StoreError` into a `DomainError` whose detail is safe to log.
pub fn map_store_err(e: StoreError) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e {
        StoreError::InvalidPath(detail) => {
            warn!(trace_id = %trace_id, detail = %detail, "store.invalid_path");
            DomainError::validation(ValidationKind::InvalidKey, detail)
        }
        StoreError::Unreachable { detail, timeout } => {
            let detail = redact(&detail);
            error!(trace_id = %trace_id, timeout, detail = %detail, "store.unreachable");
            DomainError::store(StoreErrorKind::Unavailable, detail)
        }
        StoreError::Status { status, body } => {
            let body = redact(&body);
            error!(trace_id = %trace_id, status, body = %body, "store.rejected");
            let kind = if status == 503 {
                StoreErrorKind::Unavailable
            } else {
                StoreErrorKind::Rejected
            };
            DomainError::store(kind, format!("store returned HTTP {status}"))
        }
        StoreError::Decode(detail) => {
            error!(trace_id = %trace_id, detail = %detail, "store.decode_failed");
            DomainError::store(StoreErrorKind::DataCorruption, redact(&detail))
        }
        StoreError::Transport(detail) => {
            let detail = redact(&detail);
            error!(trace_id = %trace_id, detail = %detail, "store.transport_failed");
            DomainError::store(StoreErrorKind::Other("Transport".into()), detail)
        }
    }
}
