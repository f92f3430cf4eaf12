//! HTTP request handlers for the mock server.

pub mod auth;
pub mod hold_types;
pub mod holds;
pub mod persons;

pub use auth::*;
pub use hold_types::*;
pub use holds::*;
pub use persons::*;
