pub mod auth;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;

use axum::http::{HeaderValue, Method, header};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router
///
/// Builds the full Axum router including the CORS and trace layers, useful
/// for integration testing without starting the full server.
pub fn create_app(config: Config) -> anyhow::Result<axum::Router> {
    let sessions = auth::SessionService::new(config.auth.clone());

    let state = AppState {
        config: config.clone(),
        sessions,
    };

    // Only the configured client origin may call the API with credentials
    let cors = CorsLayer::new()
        .allow_origin(config.cors.client_origin.parse::<HeaderValue>()?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
