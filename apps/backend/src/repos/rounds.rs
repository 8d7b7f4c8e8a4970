//! `/rounds` collection.

use serde_json::{Map, Value};

use super::{child_path, collection_path};
use crate::domain::round_shaper::{unshape_rounds, UnshapedRound};
use crate::errors::domain::DomainError;
use crate::infra::store_errors::map_store_err;
use crate::store::{new_key, DocumentStore};

pub const ROUNDS: &str = "rounds";

/// Store a shaped round under a fresh key with a single write.
pub async fn insert_round(
    store: &dyn DocumentStore,
    doc: Map<String, Value>,
) -> Result<String, DomainError> {
    let round_id = new_key();
    store
        .set(&child_path(ROUNDS, &round_id)?, Value::Object(doc))
        .await
        .map_err(map_store_err)?;
    Ok(round_id)
}

pub async fn list_rounds(store: &dyn DocumentStore) -> Result<Vec<UnshapedRound>, DomainError> {
    let raw = store
        .get(&collection_path(ROUNDS)?)
        .await
        .map_err(map_store_err)?;
    Ok(unshape_rounds(raw.as_ref()))
}

/// Merge `teams` into `/rounds/{round_id}/{match_id}`. Fields not named in
/// `teams` are left alone; a missing match is created.
pub async fn update_match_teams(
    store: &dyn DocumentStore,
    round_id: &str,
    match_id: &str,
    teams: Map<String, Value>,
) -> Result<(), DomainError> {
    let path = child_path(ROUNDS, round_id)?
        .child(match_id)
        .map_err(map_store_err)?;
    store.update(&path, teams).await.map_err(map_store_err)
}
