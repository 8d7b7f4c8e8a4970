//! Unique test data so concurrently running tests never share store keys.

use ulid::Ulid;

/// A player name that will not collide with names created by other tests.
pub fn unique_player_name(first_name: &str) -> String {
    format!("{first_name} {}", Ulid::new().to_string().to_lowercase())
}
