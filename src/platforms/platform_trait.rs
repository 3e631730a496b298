//! Platform trait defining the calls the recording sharer makes

use crate::error::Result;
use crate::types::{AccessToken, DirectoryUser, Recording, RecordingRef, UserToken};
use async_trait::async_trait;

/// Remote operations against a meeting platform
///
/// Every method is a single request. A non-zero envelope code from the
/// platform is returned as an `Err` with `ErrorCode::ApiRejected`. Bearer
/// tokens are passed in by the caller; an adapter holds no session state.
#[async_trait]
pub trait MeetingPlatform: Send + Sync {
    // ========================================================================
    // Credentials
    // ========================================================================

    /// Obtain an application-level access token from the app credentials
    async fn app_access_token(&self, app_id: &str, app_secret: &str) -> Result<AccessToken>;

    /// Obtain a tenant-level access token from the app credentials
    async fn tenant_access_token(&self, app_id: &str, app_secret: &str) -> Result<AccessToken>;

    /// Exchange a one-time authorization code for a user token
    ///
    /// # Arguments
    /// * `app_token` - Application access token used as bearer
    /// * `code` - The one-time authorization code
    async fn exchange_authorization_code(&self, app_token: &str, code: &str) -> Result<UserToken>;

    /// Exchange a refresh token for a new user token
    ///
    /// The returned refresh token replaces `refresh_token`, which the
    /// platform invalidates.
    async fn refresh_user_token(&self, app_token: &str, refresh_token: &str) -> Result<UserToken>;

    // ========================================================================
    // Recordings
    // ========================================================================

    /// Look up the recording of a meeting
    ///
    /// # Returns
    /// `Ok(None)` when the response carries no recording payload yet.
    async fn get_recording(&self, token: &str, meeting_id: &str) -> Result<Option<Recording>>;

    /// Grant a single user view access to a meeting's recording
    async fn add_recording_viewer(&self, user_token: &str, meeting_id: &str, user_id: &str) -> Result<()>;

    /// Apply the fixed public-link sharing policy to a recording
    async fn make_recording_public(&self, user_token: &str, recording: &RecordingRef) -> Result<()>;

    // ========================================================================
    // Directory and messaging
    // ========================================================================

    /// Resolve a user ID through the contact directory
    async fn get_user(&self, token: &str, user_id: &str) -> Result<DirectoryUser>;

    /// Send a direct text message to a user
    ///
    /// # Returns
    /// The platform's message ID
    async fn send_text_message(&self, tenant_token: &str, receive_id: &str, text: &str) -> Result<String>;
}
