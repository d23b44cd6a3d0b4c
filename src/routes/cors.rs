use crate::config::ConfigError;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Create the CORS layer for the configured allow-list.
///
/// Credentials are allowed, which rules out wildcard methods and headers, so
/// both are mirrored back from the preflight request instead. Origins outside
/// the list still get a response, just without `Access-Control-Allow-Origin`.
pub fn create_cors_layer(origins: &[String]) -> Result<CorsLayer, ConfigError> {
    let origins = origins
        .iter()
        .map(|origin| {
            // A wildcard cannot be combined with credentials
            if origin == "*" {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
