//! `/players` collection.

use serde_json::Value;

use super::{child_path, collection_path};
use crate::domain::players::unshape_players;
use crate::domain::Player;
use crate::errors::domain::DomainError;
use crate::infra::store_errors::map_store_err;
use crate::store::DocumentStore;

pub const PLAYERS: &str = "players";

pub async fn list_players(store: &dyn DocumentStore) -> Result<Vec<Player>, DomainError> {
    let raw = store
        .get(&collection_path(PLAYERS)?)
        .await
        .map_err(map_store_err)?;
    Ok(unshape_players(raw.as_ref()))
}

/// Push a new player document; returns the generated id.
pub async fn insert_player(store: &dyn DocumentStore, doc: Value) -> Result<String, DomainError> {
    store
        .push(&collection_path(PLAYERS)?, doc)
        .await
        .map_err(map_store_err)
}

/// Remove `/players/{id}`. Unknown ids are not an error.
pub async fn delete_player(store: &dyn DocumentStore, id: &str) -> Result<(), DomainError> {
    store
        .remove(&child_path(PLAYERS, id)?)
        .await
        .map_err(map_store_err)
}
