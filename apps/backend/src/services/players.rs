//! Player domain service.

use tracing::info;

use crate::domain::players::shape_player;
use crate::domain::Player;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::protocol::CreatePlayerRequest;
use crate::repos::players as players_repo;
use crate::store::DocumentStore;
use crate::trace_ctx;

/// Player domain service.
pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_players(&self, store: &dyn DocumentStore) -> Result<Vec<Player>, AppError> {
        players_repo::list_players(store)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to fetch players"))
    }

    /// Validate and store a new player; returns the generated id.
    pub async fn add_player(
        &self,
        store: &dyn DocumentStore,
        request: &CreatePlayerRequest,
    ) -> Result<String, AppError> {
        let doc = shape_player(request)?;
        let name = doc["name"].as_str().unwrap_or_default().to_string();
        let player_id = players_repo::insert_player(store, doc)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to add player"))?;

        info!(
            trace_id = %trace_ctx::trace_id(),
            player_id = %player_id,
            name = %Redacted(&name),
            "player.created"
        );
        Ok(player_id)
    }

    pub async fn delete_player(&self, store: &dyn DocumentStore, id: &str) -> Result<(), AppError> {
        players_repo::delete_player(store, id)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to delete player"))?;

        info!(trace_id = %trace_ctx::trace_id(), player_id = %id, "player.deleted");
        Ok(())
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
