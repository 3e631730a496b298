//! # libminutes
//!
//! Shares a finished meeting's recording: makes its minutes link public,
//! grants the configured collaborators access and messages each of them the
//! link.
//!
//! ```rust,ignore
//! use minutes::{FeishuPlatform, RecordingSharer, Settings};
//!
//! let settings = Settings::load(None)?;
//! let platform = FeishuPlatform::new(&settings.base_url)?;
//! let mut sharer = RecordingSharer::from_settings(platform, &settings, Some(code));
//! let report = sharer.run("6911188411934433028").await;
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod platforms;
pub mod sharer;
pub mod types;

// Re-exports for convenience
pub use config::Settings;
pub use error::{Error, ErrorCode, Result};
pub use platforms::feishu::FeishuPlatform;
pub use platforms::MeetingPlatform;
pub use sharer::{PollPolicy, RecordingSharer, RunReport, SessionState, Sleeper, StepOutcome};
pub use types::{AccessToken, DirectoryUser, Recording, RecordingRef, UserToken};

// Library version information
pub const VERSION_STRING: &str = concat!(env!("CARGO_PKG_VERSION"), " (libminutes)");
