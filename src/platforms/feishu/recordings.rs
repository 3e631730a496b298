//! Video-conference recording operations for Feishu

use crate::error::Result;

use super::client::FeishuClient;
use super::types::{ApiResponse, RecordingData, SetRecordingPermissionRequest};

impl FeishuClient {
    /// Get the recording of a finished meeting
    ///
    /// The recording is generated asynchronously after the meeting ends, so
    /// `data` is absent until it is ready.
    ///
    /// # API Endpoint
    /// GET /vc/v1/meetings/{meeting_id}/recording
    ///
    /// # Rate Limit
    /// 1000 requests per minute, 50 per second
    pub async fn get_meeting_recording(&self, token: &str, meeting_id: &str) -> Result<ApiResponse<RecordingData>> {
        let endpoint = format!("/vc/v1/meetings/{meeting_id}/recording");
        let response = self.get(&endpoint, Some(token)).await?;
        self.handle_response(response).await
    }

    /// Update who may access a meeting's recording
    ///
    /// # Arguments
    /// * `user_token` - A user_access_token; app tokens are rejected here
    /// * `meeting_id` - The meeting whose recording is updated
    /// * `request` - Permission objects to add
    ///
    /// # API Endpoint
    /// PATCH /vc/v1/meetings/{meeting_id}/recording/set_permission?user_id_type=user_id
    pub async fn set_recording_permission(
        &self,
        user_token: &str,
        meeting_id: &str,
        request: &SetRecordingPermissionRequest,
    ) -> Result<ApiResponse<serde_json::Value>> {
        let endpoint = format!("/vc/v1/meetings/{meeting_id}/recording/set_permission?user_id_type=user_id");
        let response = self.patch(&endpoint, Some(user_token), request).await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_recording_not_ready() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/vc/v1/meetings/6911188411934433028/recording")
            .match_header("authorization", "Bearer a-token")
            .with_body(r#"{"code":0,"msg":"success"}"#)
            .create_async()
            .await;

        let client = FeishuClient::new(&server.url()).unwrap();
        let body = client
            .get_meeting_recording("a-token", "6911188411934433028")
            .await
            .unwrap();
        assert!(body.data.is_none());
    }

    #[tokio::test]
    async fn test_set_permission_query_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/vc/v1/meetings/m1/recording/set_permission")
            .match_query(Matcher::UrlEncoded("user_id_type".into(), "user_id".into()))
            .match_header("authorization", "Bearer u-token")
            .match_body(Matcher::Json(serde_json::json!({
                "action_type": 0,
                "permission_objects": [{"id": "u1", "permission": 1, "type": 1}]
            })))
            .with_body(r#"{"code":0,"msg":"success","data":{}}"#)
            .create_async()
            .await;

        let client = FeishuClient::new(&server.url()).unwrap();
        let request = SetRecordingPermissionRequest::add_viewer("u1");
        client.set_recording_permission("u-token", "m1", &request).await.unwrap();
        mock.assert_async().await;
    }
}
