use axum::{Json, response::IntoResponse};

use crate::routes::Message;

/// GET / - Hello world
pub async fn page() -> impl IntoResponse {
    Json(Message::new("Hello World"))
}
