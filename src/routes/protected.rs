use axum::{Json, response::IntoResponse};

use crate::routes::Message;

/// GET /protected - Data behind the session guard
///
/// The guard has already admitted the request; the decoded identity in the
/// request extensions is not needed here.
pub async fn data() -> impl IntoResponse {
    Json(Message::new("The secret data is: 42"))
}
