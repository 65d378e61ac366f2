//! roomdesk - Main Library
//!
//! Hotel room management for admins: a REST backend for admin accounts and
//! rooms, and a client that talks to it and keeps a local room cache.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Room record, room standard, listing filter
//!   - Request/response bodies, client configuration, errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, SQLite persistence
//!   - Admin signup/signin, session tokens, auth middleware
//!   - Room creation and filtered listing
//!
//! - **`client`** - HTTP client and client-side stores
//!   - `ApiClient` with a cookie jar
//!   - `AuthState` and the persisted `RoomStore`
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend and the `roomdesk-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use roomdesk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// HTTP client and client-side state
pub mod client;
