//! Client Module
//!
//! Talks to the backend and keeps client-side state between requests.
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs         - Module exports and documentation
//! ├── api.rs         - HTTP client with a cookie jar
//! ├── auth.rs        - Sign in / sign up / sign out state
//! └── room_store.rs  - Cached rooms with loading and error state
//! ```
//!
//! State only changes when a request completes. Stores take `&mut self`,
//! so there is one writer and no request deduplication.

/// HTTP client for the backend API
pub mod api;

/// Authentication state
pub mod auth;

/// Persisted room cache
pub mod room_store;

pub use api::{ApiClient, ClientError};
pub use auth::AuthState;
pub use room_store::RoomStore;
