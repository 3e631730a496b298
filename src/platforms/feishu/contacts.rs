use crate::error::Result;

use super::client::FeishuClient;
use super::types::{ApiResponse, ContactUserData};

impl FeishuClient {
    /// Get a user from the contact directory by user_id
    ///
    /// # API Endpoint
    /// GET /contact/v3/users/{user_id}?user_id_type=user_id
    pub async fn get_contact_user(&self, token: &str, user_id: &str) -> Result<ApiResponse<ContactUserData>> {
        let endpoint = format!("/contact/v3/users/{user_id}?user_id_type=user_id");
        let response = self.get(&endpoint, Some(token)).await?;
        self.handle_response(response).await
    }
}
