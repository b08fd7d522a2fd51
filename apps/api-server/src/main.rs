//! # Folio API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, error::InternalError, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use folio_shared::ErrorResponse;
use middleware::error::AppError;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Folio API Server on {}:{} for {}",
        config.host,
        config.port,
        config.site.site_url
    );

    // Build application state
    let state = AppState::new(&config).await;

    // Prime the cached sitemap so the first crawler hit is served from cache
    if let Err(e) = state.sitemap.rebuild().await {
        tracing::warn!(error = %e, "Initial sitemap build skipped");
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

/// Malformed JSON bodies get the same Problem Details shape as other errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        let response = actix_web::HttpResponse::BadRequest().json(ErrorResponse::bad_request(&detail));
        InternalError::from_response(AppError::BadRequest(detail), response).into()
    })
}
