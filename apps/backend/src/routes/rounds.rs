use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{MatchRef, ValidatedJson};
use crate::protocol::{CreateRoundRequest, MessageResponse, RoundCreated, UpdateMatchTeamsRequest};
use crate::services::rounds::RoundService;
use crate::state::app_state::AppState;

async fn list_rounds(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rounds = RoundService::new().list_rounds(app_state.store()).await?;
    Ok(HttpResponse::Ok().json(rounds))
}

async fn create_round(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateRoundRequest>,
) -> Result<HttpResponse, AppError> {
    let round_id = RoundService::new()
        .create_round(app_state.store(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(RoundCreated {
        message: "Round added".to_string(),
        round_id,
    }))
}

async fn update_match_teams(
    app_state: web::Data<AppState>,
    target: MatchRef,
    body: ValidatedJson<UpdateMatchTeamsRequest>,
) -> Result<HttpResponse, AppError> {
    RoundService::new()
        .update_match_teams(app_state.store(), &target.round_id, &target.match_id, &body)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Match teams updated successfully")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_rounds))
        .route("", web::post().to(create_round))
        .route("/{roundId}/{matchId}", web::patch().to(update_match_teams));
}
