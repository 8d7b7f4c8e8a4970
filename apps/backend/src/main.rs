use actix_web::{web, App, HttpServer};
use padel_backend::config::server::ServerConfig;
use padel_backend::config::store::StoreConfig;
use padel_backend::infra::state::build_state;
use padel_backend::middleware::cors::cors_middleware;
use padel_backend::middleware::request_trace::RequestTrace;
use padel_backend::middleware::structured_logger::StructuredLogger;
use padel_backend::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: PADEL_STORE=memory needs nothing else
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    let store_config = match StoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "startup.config_invalid");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_store(store_config).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup.state_failed");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        store = app_state.store().kind(),
        "startup.listening"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
