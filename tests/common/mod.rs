//! Common test utilities and helpers
//!
//! - In-memory database and application fixtures
//! - Request builders and response readers
//! - Admin signup/signin helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;
pub mod http;

pub use auth_helpers::*;
pub use database::*;
pub use http::*;
