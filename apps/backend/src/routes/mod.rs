use actix_web::web;

pub mod health;
pub mod players;
pub mod practice_teams;
pub mod rounds;

/// Register every route. Shared by `main.rs` and the test app builders so
/// both serve the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // API routes: /api/players/**, /api/rounds/**, /api/practiceTeams/**
    cfg.service(
        web::scope("/api")
            .service(web::scope("/players").configure(players::configure_routes))
            .service(web::scope("/rounds").configure(rounds::configure_routes))
            .service(web::scope("/practiceTeams").configure(practice_teams::configure_routes)),
    );
}
