//! Authentication Module
//!
//! Admin registration, sign in and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── admins.rs       - Admin model and database operations
//! ├── password.rs     - bcrypt hashing
//! ├── sessions.rs     - Session token issue/verify
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: identity + password → password hashed → admin stored
//! 2. **Signin**: id number + password → verified → token set as `token` cookie
//! 3. **Protected routes**: cookie → token verified → admin resolved
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Tokens are HS256-signed and expire after the configured lifetime
//! - Signin failures all look the same to the caller

/// Admin data model and database operations
pub mod admins;

/// Password hashing
pub mod password;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{logout, signin, signup};
pub use password::{PasswordError, PasswordHasher};
pub use sessions::{AdminIdentity, HmacSigner, SessionError, SessionManager, TokenSigner};
