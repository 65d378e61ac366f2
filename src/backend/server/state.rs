/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * Nothing in the state is mutated after startup: the pool is internally
 * synchronized, the session manager holds its signer behind an `Arc` and
 * the password hasher is `Copy`. Cloning the state per request is cheap.
 *
 * # Example
 *
 * ```rust,no_run
 * use roomdesk::backend::auth::password::PasswordHasher;
 * use axum::extract::State;
 *
 * async fn handler(State(passwords): State<PasswordHasher>) {
 *     let _ = passwords.cost();
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionManager;
use crate::backend::server::config::ServerConfig;

/// Central state container for the Axum application
#[derive(Clone, Debug)]
pub struct AppState {
    /// SQLite connection pool, the only shared resource
    pub db_pool: SqlitePool,

    /// Session token issuer/verifier
    pub sessions: SessionManager,

    /// bcrypt hasher with the configured work factor
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, sessions: SessionManager, passwords: PasswordHasher) -> Self {
        Self {
            db_pool,
            sessions,
            passwords,
        }
    }

    /// State for a validated configuration
    pub fn from_config(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self::new(
            db_pool,
            SessionManager::hmac(config.secret(), config.token_ttl()),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for SessionManager {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
