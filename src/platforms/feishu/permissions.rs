//! Drive document permission operations for Feishu

use crate::error::Result;

use super::client::FeishuClient;
use super::types::{ApiResponse, PublicPermissionRequest};

impl FeishuClient {
    /// Update the public (link sharing) settings of a minutes document
    ///
    /// # Arguments
    /// * `user_token` - A user_access_token of someone who may manage the document
    /// * `object_token` - The minutes object token
    /// * `request` - The public permission settings
    ///
    /// # API Endpoint
    /// PATCH /drive/v2/permissions/{object_token}/public?type=minutes
    pub async fn patch_minutes_public_permission(
        &self,
        user_token: &str,
        object_token: &str,
        request: &PublicPermissionRequest,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let endpoint = format!("/drive/v2/permissions/{object_token}/public?type=minutes");
        let response = self.patch(&endpoint, Some(user_token), request).await?;
        self.handle_response(response).await
    }
}
