//! IM message operations for Feishu

use crate::error::Result;

use super::client::FeishuClient;
use super::types::{ApiResponse, CreateMessageRequest, MessageData};

impl FeishuClient {
    /// Send a message to a user, addressed by user_id
    ///
    /// # Arguments
    /// * `tenant_token` - A tenant_access_token; the app sends as its bot
    /// * `request` - Recipient and content
    ///
    /// # API Endpoint
    /// POST /im/v1/messages?receive_id_type=user_id
    pub async fn create_message(
        &self,
        tenant_token: &str,
        request: &CreateMessageRequest,
    ) -> Result<ApiResponse<MessageData>> {
        let response = self
            .post("/im/v1/messages?receive_id_type=user_id", Some(tenant_token), request)
            .await?;
        self.handle_response(response).await
    }
}
