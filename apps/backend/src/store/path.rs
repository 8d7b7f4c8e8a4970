use std::fmt;

use super::error::StoreError;

/// Characters the Realtime Database refuses inside a key.
const FORBIDDEN: [char; 6] = ['.', '$', '#', '[', ']', '/'];

/// Longest key the store accepts, in bytes.
const MAX_KEY_BYTES: usize = 768;

/// An absolute, validated location in the document tree.
///
/// Segments are checked on construction so that ids coming from request
/// paths (`/rounds/{roundId}/{matchId}`) can never escape their subtree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StorePath {
    segments: Vec<String>,
}

impl StorePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash separated path; empty segments are ignored so `"/players/"`
    /// and `"players"` are the same location.
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        raw.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(Self::root(), |path, segment| path.child(segment))
    }

    pub fn child(&self, key: &str) -> Result<Self, StoreError> {
        validate_key(key)?;
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Split into parent path and last key; `None` for the root.
    pub fn split_last(&self) -> Option<(StorePath, &str)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            StorePath {
                segments: parent.to_vec(),
            },
            last.as_str(),
        ))
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Check that `key` can be used as a single segment.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidPath("empty key".to_string()));
    }
    if key.len() > MAX_KEY_BYTES {
        return Err(StoreError::InvalidPath(format!(
            "key longer than {MAX_KEY_BYTES} bytes"
        )));
    }
    if let Some(c) = key
        .chars()
        .find(|c| FORBIDDEN.contains(c) || c.is_control())
    {
        return Err(StoreError::InvalidPath(format!(
            "key '{}' contains forbidden character {c:?}",
            key.escape_debug()
        )));
    }
    Ok(())
}
