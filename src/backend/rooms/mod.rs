//! Rooms Module
//!
//! Room creation and filtered listing.
//!
//! # Module Structure
//!
//! ```text
//! rooms/
//! ├── mod.rs       - Module exports and documentation
//! ├── db.rs        - Room persistence
//! ├── query.rs     - Filter to SQL translation
//! └── handlers.rs  - HTTP handlers
//! ```

/// Room persistence
pub mod db;

/// Listing query builder
pub mod query;

/// HTTP handlers for room endpoints
pub mod handlers;

pub use handlers::{create_room, fetch_rooms};
