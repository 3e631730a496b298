/// Platform-specific implementations for meeting platforms
///
/// Each platform module provides an adapter that implements the
/// `MeetingPlatform` interface the recording sharer drives.

mod platform_trait;

pub mod feishu;

// Re-export platform trait
pub use platform_trait::MeetingPlatform;
