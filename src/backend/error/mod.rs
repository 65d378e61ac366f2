//! Backend Error Module
//!
//! Error types for request handling and their conversion into HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error taxonomy
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Handlers return `Result<_, BackendError>`; the error carries both the
//! status and the message the client sees.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, ErrorKind};
