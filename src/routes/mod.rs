pub mod api;
pub mod cors;

use crate::{config::{Config, ConfigError}, docs::ApiDoc, handlers::health_check};
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use api::create_api_routes;
pub use cors::create_cors_layer;

/// Assemble the full application router
pub fn create_app(config: &Config) -> Result<Router, ConfigError> {
    let cors = create_cors_layer(&config.allowed_origins())?;

    Ok(Router::new()
        .route("/health", get(health_check))
        // Mount API routes
        .nest("/api", create_api_routes())
        // Mount Swagger UI
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        // Add tracing layer
        .layer(TraceLayer::new_for_http()))
}
