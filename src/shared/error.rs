//! Shared Error Types
//!
//! Failures that can happen on either side of the wire. The backend meets
//! `UnknownRoomStandard` when a stored row holds a standard this build does
//! not know; the client meets `RoomCache` when the persisted room file
//! cannot be written or read back.
//!
//! # Usage
//!
//! ```rust
//! use roomdesk::shared::room::RoomStandard;
//! use roomdesk::shared::error::SharedError;
//!
//! let error = "penthouse".parse::<RoomStandard>().unwrap_err();
//! assert!(matches!(error, SharedError::UnknownRoomStandard(_)));
//! ```
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SharedError {
    /// Value is not one of the known room standards
    #[error("unknown room standard: {0}")]
    UnknownRoomStandard(String),

    /// Room cache file could not be encoded or decoded
    #[error("room cache is unusable: {0}")]
    RoomCache(#[from] serde_json::Error),
}
