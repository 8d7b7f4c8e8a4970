use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for log redaction, compiled once.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// `auth=<token>` query parameter on store URLs
    pub fn auth_param() -> &'static Regex {
        static AUTH_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?i)\b(auth|access_token)=[^&\s)]+").unwrap()
        });
        &AUTH_PARAM_REGEX
    }

    /// Email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Base64-like or hex runs of 32+ chars (database secrets, ID tokens)
    pub fn opaque_token() -> &'static Regex {
        static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9+/_-]{32,}={0,2}").unwrap()
        });
        &TOKEN_REGEX
    }
}

/// Mask credentials and emails in free text such as store error messages.
///
/// Order: auth parameters first so the token value is gone before the
/// generic token pass runs.
pub fn redact(input: &str) -> String {
    let no_auth = PiiRegexRegistry::auth_param().replace_all(input, "$1=[REDACTED]");

    let no_email = PiiRegexRegistry::email().replace_all(&no_auth, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => full.to_string(),
        }
    });

    PiiRegexRegistry::opaque_token()
        .replace_all(&no_email, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Mask a person's name: first character, then `***`.
pub fn mask_name(name: &str) -> String {
    match name.trim().chars().next() {
        Some(first) => format!("{first}***"),
        None => String::new(),
    }
}

/// Log-safe view of a player name.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_name(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mask_name(self.0))
    }
}
