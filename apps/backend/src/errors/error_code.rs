//! Error codes for the padel backend API.
//!
//! Every code that can appear in a response body lives here; never pass
//! ad-hoc strings as error codes. The strings are SCREAMING_SNAKE_CASE and
//! map 1:1 to the `code` field of problem responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Malformed request body (JSON syntax or shape)
    BadRequest,
    /// Request body over the size limit
    PayloadTooLarge,
    /// `matches` missing, not a list, empty, or containing a malformed entry
    InvalidMatches,
    /// A team missing, or a team without any player id
    MissingTeams,
    /// Required path parameter missing or blank
    MissingParameters,
    /// Key that the document store cannot address
    InvalidKey,
    /// Player payload rejected (blank name)
    InvalidPlayer,
    /// Practice team payload rejected (player count, duplicates)
    InvalidPracticeTeam,

    // Document store
    /// Store call failed
    StoreError,
    /// Store could not be reached in time
    StoreUnavailable,
    /// Store returned data we could not decode
    DataCorruption,

    /// Configuration error at startup
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::InvalidMatches => "INVALID_MATCHES",
            Self::MissingTeams => "MISSING_TEAMS",
            Self::MissingParameters => "MISSING_PARAMETERS",
            Self::InvalidKey => "INVALID_KEY",
            Self::InvalidPlayer => "INVALID_PLAYER",
            Self::InvalidPracticeTeam => "INVALID_PRACTICE_TEAM",

            Self::StoreError => "STORE_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
