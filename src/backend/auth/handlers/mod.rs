//! Authentication Handlers Module
//!
//! HTTP handlers for the `/adminAuth` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── cookie.rs   - Session cookie headers
//! ├── signup.rs   - Admin registration handler
//! ├── signin.rs   - Admin authentication handler
//! └── logout.rs   - Cookie clearing handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /adminAuth/adminSignup
//! - **`signin`** - POST /adminAuth/adminSignin
//! - **`logout`** - POST /adminAuth/logout

/// Session cookie headers
pub mod cookie;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Logout handler
pub mod logout;

pub use logout::logout;
pub use signin::signin;
pub use signup::signup;
