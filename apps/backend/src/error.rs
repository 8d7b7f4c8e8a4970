use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{DomainError, StoreErrorKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::trace_ctx;

/// RFC 7807 body for every error response.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        status: StatusCode,
    },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Store error: {detail}")]
    Store { code: ErrorCode, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::Store { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::Store { detail, .. }
            | AppError::Config { detail } => detail.clone(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }

    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::PayloadTooLarge,
            detail: detail.into(),
            status: StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn store(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Store {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Convert a domain error for a specific operation.
    ///
    /// Validation failures keep their detail since it tells the caller what
    /// to fix. Store failures are logged with their cause and replaced by
    /// `context` (e.g. "Failed to save round") so store URLs and status
    /// bodies never reach the client.
    pub fn from_domain(err: DomainError, context: &str) -> Self {
        match err {
            DomainError::Validation(..) => err.into(),
            DomainError::Store(ref kind, ref cause) => {
                error!(
                    trace_id = %trace_ctx::trace_id(),
                    kind = ?kind,
                    cause = %cause,
                    "{context}"
                );
                AppError::store(store_code(kind), context)
            }
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::InvalidMatches => ErrorCode::InvalidMatches,
        ValidationKind::MissingTeams => ErrorCode::MissingTeams,
        ValidationKind::MissingParameters => ErrorCode::MissingParameters,
        ValidationKind::InvalidKey => ErrorCode::InvalidKey,
        ValidationKind::InvalidPlayer => ErrorCode::InvalidPlayer,
        ValidationKind::InvalidPracticeTeam => ErrorCode::InvalidPracticeTeam,
    }
}

fn store_code(kind: &StoreErrorKind) -> ErrorCode {
    match kind {
        StoreErrorKind::Unavailable => ErrorCode::StoreUnavailable,
        StoreErrorKind::DataCorruption => ErrorCode::DataCorruption,
        _ => ErrorCode::StoreError,
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                AppError::invalid(validation_code(&kind), detail)
            }
            DomainError::Store(kind, detail) => AppError::store(store_code(&kind), detail),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://padel.club/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
