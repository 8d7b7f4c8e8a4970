use tracing::info;

use crate::domain::practice_teams::shape_practice_team;
use crate::domain::PracticeTeam;
use crate::error::AppError;
use crate::protocol::CreatePracticeTeamRequest;
use crate::repos::practice_teams as practice_teams_repo;
use crate::store::DocumentStore;
use crate::trace_ctx;

pub struct PracticeTeamService;

impl PracticeTeamService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_practice_teams(
        &self,
        store: &dyn DocumentStore,
    ) -> Result<Vec<PracticeTeam>, AppError> {
        practice_teams_repo::list_practice_teams(store)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to fetch practice teams"))
    }

    pub async fn add_practice_team(
        &self,
        store: &dyn DocumentStore,
        request: &CreatePracticeTeamRequest,
    ) -> Result<String, AppError> {
        let doc = shape_practice_team(request)?;
        let id = practice_teams_repo::insert_practice_team(store, doc)
            .await
            .map_err(|e| AppError::from_domain(e, "Failed to add practice team"))?;

        info!(
            trace_id = %trace_ctx::trace_id(),
            practice_team_id = %id,
            start_time = request.start_time.as_deref().unwrap_or(""),
            "practice_team.created"
        );
        Ok(id)
    }
}

impl Default for PracticeTeamService {
    fn default() -> Self {
        Self::new()
    }
}
