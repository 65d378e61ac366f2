//! Server Module
//!
//! Server initialization, configuration and application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration and database pool
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, TOML file, environment
//! 2. **Database**: connect and migrate
//! 3. **State Creation**: session manager, password hasher, pool
//! 4. **Router Creation**: routes and layers

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, DatabaseError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
