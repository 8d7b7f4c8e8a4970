//! Player records.

use serde_json::{json, Value};

use super::models::Player;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::CreatePlayerRequest;

/// Stored document for a new player: the trimmed name and nothing else.
pub fn shape_player(request: &CreatePlayerRequest) -> Result<Value, DomainError> {
    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            DomainError::validation(ValidationKind::InvalidPlayer, "player name must not be blank")
        })?;
    Ok(json!({ "name": name }))
}

/// `{id, ...fields}` for every object entry under `/players`. The store key
/// always wins over a stored `id` field.
pub fn unshape_players(raw: Option<&Value>) -> Vec<Player> {
    let Some(players) = raw.and_then(Value::as_object) else {
        return Vec::new();
    };

    players
        .iter()
        .filter_map(|(id, value)| {
            let mut fields = value.as_object()?.clone();
            fields.remove("id");
            let name = match fields.remove("name") {
                Some(Value::String(name)) => name,
                _ => String::new(),
            };
            Some(Player {
                id: id.clone(),
                name,
                extra: fields,
            })
        })
        .collect()
}
