//! Domain layer: record types and the pure transformations between request
//! bodies, stored documents and API responses. Nothing here touches the store.

pub mod models;
pub mod players;
pub mod practice_teams;
pub mod round_shaper;

pub use models::{Match, Player, PracticeTeam, Round, Team};

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_practice_teams;
#[cfg(test)]
mod tests_props_round_shaper;

/// Non-empty string value, the stored form of an optional timestamp.
pub(crate) fn non_empty_str(value: Option<&serde_json::Value>) -> Option<String> {
    value
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
