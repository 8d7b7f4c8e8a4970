//! Domain-level error type used across repos and services.
//!
//! This type is HTTP-agnostic and store-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert via
//! `From<DomainError> for AppError` or [`AppError::from_domain`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which input rule a request broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationKind {
    InvalidMatches,
    MissingTeams,
    MissingParameters,
    InvalidKey,
    InvalidPlayer,
    InvalidPracticeTeam,
}

/// Operational failures of the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    /// Timed out or could not connect
    Unavailable,
    /// Store answered with a non-success status
    Rejected,
    /// Store answered with something we could not decode
    DataCorruption,
    Other(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation failure
    Validation(ValidationKind, String),
    /// Document store failure
    Store(StoreErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Store(kind, d) => write!(f, "store error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn store(kind: StoreErrorKind, detail: impl Into<String>) -> Self {
        Self::Store(kind, detail.into())
    }
}
