use axum::response::{Html, IntoResponse};

/// GET /app - Client shell page
///
/// A single page offering login, logout, and protected-data actions; all
/// behavior lives in /static/app.js.
pub async fn page() -> impl IntoResponse {
    let html = include_str!("../../templates/app.html");
    Html(html)
}
