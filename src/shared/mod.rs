//! Shared Module
//!
//! Types shared between the client and the backend: the room record and
//! its listing filter, the JSON request/response bodies, the client
//! configuration and the shared error type.
//!
//! Nothing in here depends on the `ssr` feature, so the client can be built
//! without the server stack.

/// Room record, room standard and listing filter
pub mod room;

/// JSON request and response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Client configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use room::{FilterClause, FilterValue, Room, RoomFilter, RoomFilterQuery, RoomStandard};
pub use api::{
    CreateRoomRequest, CreateRoomResponse, MessageResponse, RoomsResponse, SigninRequest,
    SignupRequest,
};
pub use error::SharedError;
pub use config::{ClientConfig, ClientConfigBuilder, ConfigError};
