//! Database and application fixtures
//!
//! Every fixture gets its own in-memory SQLite database, so tests never
//! share rows and can run in parallel.

use std::time::Duration;

use axum::Router;
use roomdesk::backend::auth::{PasswordHasher, SessionManager};
use roomdesk::backend::routes::create_router;
use roomdesk::backend::server::config::memory_pool;
use roomdesk::backend::server::AppState;

pub const TEST_SECRET: &str = "test-secret";

/// Lowest bcrypt cost; hashing at the default cost makes tests crawl
pub const TEST_BCRYPT_COST: u32 = 4;

pub const TEST_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Application under test
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = memory_pool()
            .await
            .expect("Failed to create in-memory database");
        let state = AppState::new(
            pool,
            SessionManager::hmac(TEST_SECRET, TEST_TTL),
            PasswordHasher::new(TEST_BCRYPT_COST),
        );
        let router = create_router(state.clone(), &["http://localhost:5173".to_string()]);
        Self { state, router }
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.state.db_pool
    }
}
