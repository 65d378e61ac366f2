//! Backend Module
//!
//! Server-side code: an Axum REST API for admin accounts and hotel rooms,
//! backed by SQLite and guarded by cookie-carried session tokens.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Admin accounts, password hashing, session tokens
//! - **`middleware`** - Session cookie verification
//! - **`rooms`** - Room persistence, query building, handlers
//! - **`error`** - Backend error taxonomy
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── rooms/          - Rooms
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! client → router → auth middleware (room routes only) → handler → SQLite
//! → `{ "message": ... }` JSON response
//!
//! # State Management
//!
//! `AppState` holds the connection pool, the session manager and the
//! password hasher. None of it changes after startup.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; the error renders as the
//! endpoint's status and message. Causes are logged, never returned.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Admin authentication and sessions
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Room creation and listing
#[cfg(feature = "ssr")]
pub mod rooms;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use routes::create_router;
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
