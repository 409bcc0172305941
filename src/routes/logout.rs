use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use tracing::info;

use crate::routes::{AppState, Message};

/// POST /logout - Clear the session cookie
///
/// Always succeeds, whether or not a session cookie was attached.
pub async fn action(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Message>) {
    info!("Processing logout");

    let jar = jar.add(state.sessions.terminate_session());

    (jar, Json(Message::new("Logout successful")))
}
