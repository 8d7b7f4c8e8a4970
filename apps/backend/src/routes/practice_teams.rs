use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::protocol::{CreatePracticeTeamRequest, PracticeTeamCreated};
use crate::services::practice_teams::PracticeTeamService;
use crate::state::app_state::AppState;

async fn list_practice_teams(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let teams = PracticeTeamService::new()
        .list_practice_teams(app_state.store())
        .await?;
    Ok(HttpResponse::Ok().json(teams))
}

async fn add_practice_team(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePracticeTeamRequest>,
) -> Result<HttpResponse, AppError> {
    let practice_team_id = PracticeTeamService::new()
        .add_practice_team(app_state.store(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(PracticeTeamCreated {
        message: "Practice team added".to_string(),
        practice_team_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_practice_teams))
        .route("", web::post().to(add_practice_team));
}
