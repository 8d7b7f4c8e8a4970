//! Rounds: creation, listing and match team edits.

use tracing::{info, warn};

use crate::domain::round_shaper::{shape_match_teams, shape_round};
use crate::domain::Round;
use crate::error::AppError;
use crate::protocol::{CreateRoundRequest, UpdateMatchTeamsRequest};
use crate::repos::rounds as rounds_repo;
use crate::store::DocumentStore;
use crate::trace_ctx;

pub struct RoundService;

impl RoundService {
    pub fn new() -> Self {
        Self
    }

    /// Shape and store a round; returns its id.
    pub async fn create_round(
        &self,
        store: &dyn DocumentStore,
        request: &CreateRoundRequest,
    ) -> Result<String, AppError> {
        let doc = shape_round(request)?;
        // two time keys, the rest are matches
        let match_count = doc.len().saturating_sub(2);

        let round_id = rounds_repo::insert_round(store, doc)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to save round"))?;

        info!(
            trace_id = %trace_ctx::trace_id(),
            round_id = %round_id,
            matches = match_count,
            "round.created"
        );
        Ok(round_id)
    }

    /// All rounds with their matches in submission order. Malformed match
    /// entries are left out and logged.
    pub async fn list_rounds(&self, store: &dyn DocumentStore) -> Result<Vec<Round>, AppError> {
        let unshaped = rounds_repo::list_rounds(store)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to fetch rounds"))?;

        Ok(unshaped
            .into_iter()
            .map(|u| {
                if u.dropped > 0 {
                    warn!(
                        trace_id = %trace_ctx::trace_id(),
                        round_id = %u.round.id,
                        dropped = u.dropped,
                        "round.matches_dropped"
                    );
                }
                u.round
            })
            .collect())
    }

    /// Replace both teams of one match, leaving its other fields alone.
    ///
    /// Blank ids, missing teams and teams without a player are rejected
    /// before anything is written.
    pub async fn update_match_teams(
        &self,
        store: &dyn DocumentStore,
        round_id: &str,
        match_id: &str,
        request: &UpdateMatchTeamsRequest,
    ) -> Result<(), AppError> {
        let teams = shape_match_teams(round_id, match_id, request)?;

        rounds_repo::update_match_teams(store, round_id, match_id, teams)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to update match teams"))?;

        info!(
            trace_id = %trace_ctx::trace_id(),
            round_id = %round_id,
            match_id = %match_id,
            "round.match_teams_updated"
        );
        Ok(())
    }
}

impl Default for RoundService {
    fn default() -> Self {
        Self::new()
    }
}
