use std::env;
use std::time::Duration;

use crate::error::AppError;

/// Default request timeout, same as the web client uses against this API.
const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Which document store backs the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Firebase Realtime Database over REST
    Rtdb,
    /// In-process tree, lost on restart
    Memory,
}

/// Connection settings for the Realtime Database
#[derive(Debug, Clone, PartialEq)]
pub struct RtdbConfig {
    pub url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub rtdb: Option<RtdbConfig>,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self {
            kind: StoreKind::Memory,
            rtdb: None,
        }
    }

    pub fn rtdb(config: RtdbConfig) -> Self {
        Self {
            kind: StoreKind::Rtdb,
            rtdb: Some(config),
        }
    }

    /// Read `PADEL_STORE`, `RTDB_URL`, `RTDB_AUTH_TOKEN`, `RTDB_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, AppError> {
        match store_kind()? {
            StoreKind::Memory => Ok(Self::memory()),
            StoreKind::Rtdb => Ok(Self::rtdb(RtdbConfig {
                url: rtdb_url()?,
                auth_token: optional_var("RTDB_AUTH_TOKEN"),
                timeout: timeout()?,
            })),
        }
    }
}

fn store_kind() -> Result<StoreKind, AppError> {
    let raw = env::var("PADEL_STORE").unwrap_or_else(|_| "rtdb".to_string());
    match raw.trim().to_ascii_lowercase().as_str() {
        "rtdb" | "firebase" => Ok(StoreKind::Rtdb),
        "memory" => Ok(StoreKind::Memory),
        other => Err(AppError::config(format!(
            "PADEL_STORE must be 'rtdb' or 'memory', got '{other}'"
        ))),
    }
}

fn rtdb_url() -> Result<String, AppError> {
    let url = must_var("RTDB_URL")?;
    let url = url.trim().trim_end_matches('/').to_string();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(AppError::config(format!(
            "RTDB_URL must start with http:// or https://, got '{url}'"
        )));
    }
    Ok(url)
}

fn timeout() -> Result<Duration, AppError> {
    match optional_var("RTDB_TIMEOUT_MS") {
        None => Ok(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
        Some(raw) => raw
            .parse::<u64>()
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .ok_or_else(|| {
                AppError::config(format!(
                    "RTDB_TIMEOUT_MS must be a positive integer, got '{raw}'"
                ))
            }),
    }
}

/// Unset and blank are treated the same.
pub(crate) fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    optional_var(name).ok_or_else(|| {
        AppError::config(format!("Required environment variable '{name}' is not set"))
    })
}
