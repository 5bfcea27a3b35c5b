use axum::{Router, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod args;
pub mod routes;

use crate::routes::greeting;

#[derive(OpenApi)]
#[openapi(paths(greeting::get))]
pub struct ApiDoc;

/// Builds the application router: the greeting endpoint plus Swagger UI.
pub fn app() -> Router {
    Router::new()
        .route("/", get(greeting::get))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(16 * 1024))
}
