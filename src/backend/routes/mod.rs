//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly and layers
//! └── api_routes.rs   - Admin auth and room routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use roomdesk::backend::routes::create_router;
//! use roomdesk::backend::server::{config::ServerConfig, AppState};
//!
//! # async fn example(state: AppState, config: ServerConfig) {
//! let router = create_router(state, &config.cors_origins);
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
