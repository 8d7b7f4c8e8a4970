//! `/practiceTeams` collection.

use serde_json::Value;

use super::collection_path;
use crate::domain::practice_teams::unshape_practice_teams;
use crate::domain::PracticeTeam;
use crate::errors::domain::DomainError;
use crate::infra::store_errors::map_store_err;
use crate::store::DocumentStore;

pub const PRACTICE_TEAMS: &str = "practiceTeams";

pub async fn list_practice_teams(
    store: &dyn DocumentStore,
) -> Result<Vec<PracticeTeam>, DomainError> {
    let raw = store
        .get(&collection_path(PRACTICE_TEAMS)?)
        .await
        .map_err(map_store_err)?;
    Ok(unshape_practice_teams(raw.as_ref()))
}

pub async fn insert_practice_team(
    store: &dyn DocumentStore,
    doc: Value,
) -> Result<String, DomainError> {
    store
        .push(&collection_path(PRACTICE_TEAMS)?, doc)
        .await
        .map_err(map_store_err)
}
