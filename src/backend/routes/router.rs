/**
 * Router Configuration
 *
 * Combines the API routes with the cross-cutting layers:
 *
 * 1. API routes (`/adminAuth`, `/rooms`)
 * 2. JSON 404 fallback
 * 3. 10 MiB request body limit
 * 4. Request tracing
 * 5. CORS with credentials for the configured dashboard origins
 */

use axum::{
    extract::DefaultBodyLimit,
    http::{
        header::{CONTENT_TYPE, COOKIE},
        HeaderValue, Method,
    },
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Maximum accepted request body
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub const NOT_FOUND: &str = "Not Found";

async fn not_found() -> BackendError {
    BackendError::not_found(NOT_FOUND)
}

/// CORS policy for `origins`
///
/// Credentials are allowed, so origins are always listed explicitly.
/// Origins that are not valid header values are skipped.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, COOKIE])
        .allow_credentials(true)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origins: &[String]) -> Router<()> {
    let router = configure_api_routes(Router::new(), app_state.clone());

    router
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(app_state)
}
