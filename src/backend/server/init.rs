/**
 * Server Initialization
 *
 * 1. Connect to the database and apply migrations
 * 2. Build the application state from the configuration
 * 3. Create the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, DatabaseError, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// `config` must already be validated. Unlike optional services, a database
/// that cannot be reached stops startup.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, DatabaseError> {
    tracing::info!("Initializing roomdesk backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let app_state = AppState::from_config(db_pool, config);

    tracing::info!(
        "Sessions last {}h, bcrypt cost {}",
        config.token_ttl_hours,
        config.bcrypt_cost
    );

    let app = create_router(app_state, &config.cors_origins);
    tracing::info!("Router configured");

    Ok(app)
}
