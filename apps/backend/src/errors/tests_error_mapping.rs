// Unit tests for DomainError -> AppError mapping
use actix_web::http::StatusCode;

use crate::errors::domain::{DomainError, StoreErrorKind, ValidationKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_kinds_to_400_codes() {
    let cases = [
        (ValidationKind::InvalidMatches, ErrorCode::InvalidMatches),
        (ValidationKind::MissingTeams, ErrorCode::MissingTeams),
        (ValidationKind::MissingParameters, ErrorCode::MissingParameters),
        (ValidationKind::InvalidKey, ErrorCode::InvalidKey),
        (ValidationKind::InvalidPlayer, ErrorCode::InvalidPlayer),
        (
            ValidationKind::InvalidPracticeTeam,
            ErrorCode::InvalidPracticeTeam,
        ),
    ];

    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.detail(), "bad input");
    }
}

#[test]
fn maps_store_failures_to_500() {
    let down: AppError = DomainError::store(StoreErrorKind::Unavailable, "timeout").into();
    assert_eq!(down.code(), ErrorCode::StoreUnavailable);
    assert_eq!(down.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let rejected: AppError = DomainError::store(StoreErrorKind::Rejected, "401").into();
    assert_eq!(rejected.code(), ErrorCode::StoreError);
    assert_eq!(rejected.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let corrupt: AppError =
        DomainError::store(StoreErrorKind::DataCorruption, "not json").into();
    assert_eq!(corrupt.code(), ErrorCode::DataCorruption);
}

#[test]
fn from_domain_hides_store_cause_behind_context() {
    let err = DomainError::store(
        StoreErrorKind::Rejected,
        "HTTP 401 from https://example/rounds.json?auth=secret",
    );
    let app = AppError::from_domain(err, "Failed to fetch rounds");
    assert_eq!(app.detail(), "Failed to fetch rounds");
    assert!(!app.to_string().contains("secret"));
}

#[test]
fn from_domain_keeps_validation_detail() {
    let err = DomainError::validation(ValidationKind::InvalidMatches, "matches must not be empty");
    let app = AppError::from_domain(err, "Failed to save round");
    assert_eq!(app.code(), ErrorCode::InvalidMatches);
    assert_eq!(app.detail(), "matches must not be empty");
}
