//! Credential acquisition for a sharing run

use tracing::{info, warn};

use crate::platforms::MeetingPlatform;

use super::locator::Sleeper;
use super::report::StepOutcome;
use super::RecordingSharer;

impl<P: MeetingPlatform, S: Sleeper> RecordingSharer<P, S> {
    /// Obtain the application access token
    ///
    /// On failure the token stays unset. The run does not stop: later calls
    /// go out with an empty bearer and are rejected by the platform.
    pub async fn acquire_app_token(&mut self) -> StepOutcome {
        let result = self
            .platform
            .app_access_token(&self.session.app_id, self.session.app_secret())
            .await;

        match result {
            Ok(token) => {
                info!(expires_in = token.expires_in, "Obtained app_access_token");
                self.session.app_access_token = Some(token.token);
                StepOutcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "Failed to obtain app_access_token, check app_id and app_secret");
                StepOutcome::failed(e)
            }
        }
    }

    /// Exchange a one-time authorization code for a refresh token
    ///
    /// Only the refresh token is kept; the user access token always comes
    /// from [`Self::refresh_user_token`].
    ///
    /// # Returns
    /// `true` when the exchange succeeded
    pub async fn acquire_user_token(&mut self, authorization_code: &str) -> bool {
        let app_token = self.session.app_bearer();
        match self
            .platform
            .exchange_authorization_code(&app_token, authorization_code)
            .await
        {
            Ok(token) => {
                self.session.refresh_token = Some(token.refresh_token);
                true
            }
            Err(e) => {
                warn!(error = %e, "Failed to exchange authorization code");
                false
            }
        }
    }

    /// Exchange the current refresh token for a new user access token
    ///
    /// The refresh token rotates: the one sent is discarded and the returned
    /// one replaces it. On failure both fields are left as they were.
    pub async fn refresh_user_token(&mut self) -> StepOutcome {
        let app_token = self.session.app_bearer();
        let refresh_token = self.session.refresh_token.clone().unwrap_or_default();

        match self.platform.refresh_user_token(&app_token, &refresh_token).await {
            Ok(token) => {
                info!(expires_in = token.expires_in, "Refreshed user_access_token");
                self.session.user_access_token = Some(token.access_token);
                self.session.refresh_token = Some(token.refresh_token);
                StepOutcome::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "Failed to refresh user_access_token");
                StepOutcome::failed(e)
            }
        }
    }

    /// Obtain the user access token for this run
    ///
    /// Exchanges the authorization code first unless the session already
    /// holds a refresh token, then refreshes.
    pub(crate) async fn acquire_user_credentials(&mut self) -> StepOutcome {
        if self.session.refresh_token.is_none() {
            let Some(code) = self.session.authorization_code.clone() else {
                warn!("No refresh token or authorization code configured");
                return StepOutcome::failed("no refresh token or authorization code configured");
            };
            if !self.acquire_user_token(&code).await {
                return StepOutcome::failed("authorization code exchange failed");
            }
        }

        self.refresh_user_token().await
    }

    /// Obtain a tenant access token
    ///
    /// Fetched fresh on every call; the previous one is never reused.
    pub async fn acquire_tenant_token(&mut self) -> Option<String> {
        let result = self
            .platform
            .tenant_access_token(&self.session.app_id, self.session.app_secret())
            .await;

        match result {
            Ok(token) => {
                self.session.tenant_access_token = Some(token.token.clone());
                Some(token.token)
            }
            Err(e) => {
                warn!(error = %e, "Failed to obtain tenant_access_token, check app_id and app_secret");
                None
            }
        }
    }
}
