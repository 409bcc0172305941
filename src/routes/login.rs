use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use tracing::info;

use crate::error::AuthError;
use crate::routes::{AppState, Message};

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /login - Check credentials and set the session cookie
pub async fn action(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Message>), AuthError> {
    info!(username = %body.username, "Processing login");

    let cookie = state.sessions.issue_session(&body.username, &body.password)?;

    info!(username = %body.username, "Login successful");

    Ok((jar.add(cookie), Json(Message::new("Login successful"))))
}
