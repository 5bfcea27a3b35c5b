use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Debug, Clone)]
pub struct Greeting {
    pub message: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static JSON greeting", body = Greeting)
    )
)]
pub async fn get() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(Greeting {
            message: "Hello eric",
        }),
    )
}
