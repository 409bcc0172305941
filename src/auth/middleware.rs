//! Authentication middleware for Axum

use crate::error::AuthError;
use crate::routes::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

/// Request gate in front of protected routes
///
/// Extracts the session token from the cookie jar, verifies it, and either
/// calls through to the inner handler or answers 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = state.sessions.authorize(&jar)?;

    debug!(username = %user.username, "Session admitted");

    // Make the decoded identity available to handlers
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
