//! Core types for libminutes
//!
//! Platform-agnostic values produced by platform adapters and consumed by the
//! recording sharer.

pub mod recording;
pub mod token;
pub mod user;

// Re-export for convenience
pub use recording::{Recording, RecordingRef, OBJECT_TOKEN_LEN};
pub use token::{AccessToken, UserToken};
pub use user::DirectoryUser;
