use actix_web::{web, HttpResponse, Result};

use crate::error::AppError;
use crate::extractors::{PlayerId, ValidatedJson};
use crate::protocol::{CreatePlayerRequest, MessageResponse, PlayerCreated};
use crate::services::players::PlayerService;
use crate::state::app_state::AppState;

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let players = PlayerService::new()
        .list_players(app_state.store())
        .await?;
    Ok(HttpResponse::Ok().json(players))
}

async fn add_player(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let player_id = PlayerService::new()
        .add_player(app_state.store(), &body)
        .await?;
    Ok(HttpResponse::Ok().json(PlayerCreated {
        message: "Player added".to_string(),
        player_id,
    }))
}

async fn delete_player(
    app_state: web::Data<AppState>,
    id: PlayerId,
) -> Result<HttpResponse, AppError> {
    PlayerService::new()
        .delete_player(app_state.store(), &id.0)
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Player deleted")))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_players))
        .route("", web::post().to(add_player))
        .route("/{id}", web::delete().to(delete_player));
}
