//! Path parameters that become store keys.
//!
//! Ids arrive URL-decoded, so anything the store would treat as a path
//! separator or refuse outright is rejected here with `INVALID_KEY`.

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::store::path::validate_key;

fn path_key(req: &HttpRequest, name: &str) -> Result<String, AppError> {
    let raw = req.match_info().get(name).unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(AppError::invalid(
            ErrorCode::MissingParameters,
            "Missing required parameters or body data",
        ));
    }
    // " p1" would be a different store key than "p1"
    if raw.trim() != raw {
        return Err(AppError::invalid(
            ErrorCode::InvalidKey,
            format!("{name}: surrounding whitespace is not allowed"),
        ));
    }

    validate_key(raw)
        .map_err(|e| AppError::invalid(ErrorCode::InvalidKey, format!("{name}: {e}")))?;
    Ok(raw.to_string())
}

/// `{id}` in `/players/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerId(pub String);

impl FromRequest for PlayerId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(path_key(req, "id").map(PlayerId))
    }
}

/// `{roundId}/{matchId}` in `/rounds/{roundId}/{matchId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRef {
    pub round_id: String,
    pub match_id: String,
}

impl FromRequest for MatchRef {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match_ref(req))
    }
}

fn match_ref(req: &HttpRequest) -> Result<MatchRef, AppError> {
    Ok(MatchRef {
        round_id: path_key(req, "roundId")?,
        match_id: path_key(req, "matchId")?,
    })
}
