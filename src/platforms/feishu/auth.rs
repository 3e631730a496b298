//! Token issuance for Feishu

use crate::error::{Error, ErrorCode, Result};

use super::client::FeishuClient;
use super::types::{
    ApiResponse, AppAccessTokenResponse, AppCredentialsRequest, AuthorizationCodeRequest,
    RefreshTokenRequest, TenantAccessTokenResponse, UserAccessTokenData,
};

impl FeishuClient {
    /// Obtain an app_access_token for a self-built app
    ///
    /// # API Endpoint
    /// POST /auth/v3/app_access_token/internal
    pub async fn get_app_access_token(&self, app_id: &str, app_secret: &str) -> Result<AppAccessTokenResponse> {
        let request = AppCredentialsRequest {
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
        };

        let response = self.post("/auth/v3/app_access_token/internal", None, &request).await?;
        self.handle_response(response).await
    }

    /// Obtain a tenant_access_token for a self-built app
    ///
    /// # API Endpoint
    /// POST /auth/v3/tenant_access_token/internal
    pub async fn get_tenant_access_token(
        &self,
        app_id: &str,
        app_secret: &str,
    ) -> Result<TenantAccessTokenResponse> {
        let request = AppCredentialsRequest {
            app_id: app_id.to_string(),
            app_secret: app_secret.to_string(),
        };

        let response = self.post("/auth/v3/tenant_access_token/internal", None, &request).await?;
        self.handle_response(response).await
    }

    /// Exchange a login authorization code for a user_access_token
    ///
    /// # Arguments
    /// * `app_token` - The app_access_token, sent as bearer
    /// * `code` - One-time authorization code from the login redirect
    ///
    /// # API Endpoint
    /// POST /authen/v1/access_token
    pub async fn exchange_code(&self, app_token: &str, code: &str) -> Result<UserAccessTokenData> {
        let request = AuthorizationCodeRequest::new(code);
        let response = self.post("/authen/v1/access_token", Some(app_token), &request).await?;
        let body: ApiResponse<UserAccessTokenData> = self.handle_response(response).await?;
        user_token_data(body)
    }

    /// Refresh a user_access_token
    ///
    /// # Arguments
    /// * `app_token` - The app_access_token, sent as bearer
    /// * `refresh_token` - The current refresh token; invalid after this call
    ///
    /// # API Endpoint
    /// POST /authen/v1/refresh_access_token
    pub async fn refresh_access_token(&self, app_token: &str, refresh_token: &str) -> Result<UserAccessTokenData> {
        let request = RefreshTokenRequest::new(refresh_token);
        let response = self
            .post("/authen/v1/refresh_access_token", Some(app_token), &request)
            .await?;
        let body: ApiResponse<UserAccessTokenData> = self.handle_response(response).await?;
        user_token_data(body)
    }
}

fn user_token_data(body: ApiResponse<UserAccessTokenData>) -> Result<UserAccessTokenData> {
    body.data.ok_or_else(|| {
        Error::new(
            ErrorCode::AuthenticationFailed,
            "User token response carried no data",
        )
    })
}
