use async_trait::async_trait;

use crate::error::Result;
use crate::platforms::platform_trait::MeetingPlatform;
use crate::types::{AccessToken, DirectoryUser, Recording, RecordingRef, UserToken};

use super::client::FeishuClient;
use super::convert::contact_to_user;
use super::types::{CreateMessageRequest, PublicPermissionRequest, SetRecordingPermissionRequest};

/// Wrapper struct that implements the MeetingPlatform trait for Feishu
pub struct FeishuPlatform {
    client: FeishuClient,
}

impl FeishuPlatform {
    /// Create a new Feishu platform instance
    ///
    /// # Arguments
    /// * `base_url` - The API root (see [`super::DEFAULT_BASE_URL`])
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: FeishuClient::new(base_url)?,
        })
    }

    /// Get the underlying client (for accessing Feishu-specific methods)
    pub fn client(&self) -> &FeishuClient {
        &self.client
    }
}

#[async_trait]
impl MeetingPlatform for FeishuPlatform {
    async fn app_access_token(&self, app_id: &str, app_secret: &str) -> Result<AccessToken> {
        let body = self.client.get_app_access_token(app_id, app_secret).await?;
        Ok(body.into())
    }

    async fn tenant_access_token(&self, app_id: &str, app_secret: &str) -> Result<AccessToken> {
        let body = self.client.get_tenant_access_token(app_id, app_secret).await?;
        Ok(body.into())
    }

    async fn exchange_authorization_code(&self, app_token: &str, code: &str) -> Result<UserToken> {
        let data = self.client.exchange_code(app_token, code).await?;
        Ok(data.into())
    }

    async fn refresh_user_token(&self, app_token: &str, refresh_token: &str) -> Result<UserToken> {
        let data = self.client.refresh_access_token(app_token, refresh_token).await?;
        Ok(data.into())
    }

    async fn get_recording(&self, token: &str, meeting_id: &str) -> Result<Option<Recording>> {
        let body = self.client.get_meeting_recording(token, meeting_id).await?;
        Ok(body.data.and_then(|data| data.recording).map(Recording::from))
    }

    async fn add_recording_viewer(&self, user_token: &str, meeting_id: &str, user_id: &str) -> Result<()> {
        let request = SetRecordingPermissionRequest::add_viewer(user_id);
        self.client
            .set_recording_permission(user_token, meeting_id, &request)
            .await?;
        Ok(())
    }

    async fn make_recording_public(&self, user_token: &str, recording: &RecordingRef) -> Result<()> {
        let request = PublicPermissionRequest::minutes_public_link();
        self.client
            .patch_minutes_public_permission(user_token, recording.as_str(), &request)
            .await?;
        Ok(())
    }

    async fn get_user(&self, token: &str, user_id: &str) -> Result<DirectoryUser> {
        let body = self.client.get_contact_user(token, user_id).await?;
        let data = body.data.ok_or_else(|| {
            crate::error::Error::new(
                crate::error::ErrorCode::NotFound,
                format!("No directory entry for user {user_id}"),
            )
        })?;
        Ok(contact_to_user(data.user, user_id))
    }

    async fn send_text_message(&self, tenant_token: &str, receive_id: &str, text: &str) -> Result<String> {
        let request = CreateMessageRequest::text(receive_id, text);
        let body = self.client.create_message(tenant_token, &request).await?;
        Ok(body.data.map(|data| data.message_id).unwrap_or_default())
    }
}
