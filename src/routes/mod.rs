use axum::{
    Router,
    routing::{get, post},
};
use serde::Serialize;

use crate::auth::{SessionService, auth_middleware};
use crate::config::Config;

mod app;
mod assets;
mod health;
mod index;
mod login;
mod logout;
mod protected;

pub use assets::AssetsService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionService,
}

/// Uniform `{"message": ...}` response body
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    // Protected routes sit behind the session guard
    let protected = Router::new()
        .route("/protected", get(protected::data))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/login", post(login::action))
        .route("/logout", post(logout::action))
        .route("/app", get(app::page))
        .merge(protected)
        .nest_service("/static", AssetsService::new())
        .with_state(state)
}
