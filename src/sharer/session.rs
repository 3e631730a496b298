//! Per-run session state
//!
//! One `SessionState` lives for exactly one sharing run. The configuration
//! half is read-only; the token half is written by the step that produces
//! each token and read by the steps after it.

use secrecy::{ExposeSecret, SecretString};

use crate::config::Settings;
use crate::types::RecordingRef;

/// Credentials and intermediate results threaded through one run
#[derive(Debug)]
pub struct SessionState {
    /// Application ID
    pub app_id: String,
    app_secret: SecretString,
    /// Collaborators to grant, in processing order
    pub authorized_user_ids: Vec<String>,
    /// One-time code for the user token exchange
    pub authorization_code: Option<String>,

    /// Set once the app token call succeeds
    pub app_access_token: Option<String>,
    /// Set once a user token refresh succeeds
    pub user_access_token: Option<String>,
    /// Current refresh token; replaced on every refresh
    pub refresh_token: Option<String>,
    /// Last tenant token fetched; never reused for a later message
    pub tenant_access_token: Option<String>,
    /// Object token of the located recording
    pub recording: Option<RecordingRef>,
}

impl SessionState {
    /// Create a new session with no tokens
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        SessionState {
            app_id: app_id.into(),
            app_secret: SecretString::new(app_secret.into()),
            authorized_user_ids: Vec::new(),
            authorization_code: None,
            app_access_token: None,
            user_access_token: None,
            refresh_token: None,
            tenant_access_token: None,
            recording: None,
        }
    }

    /// Build a session from loaded settings
    ///
    /// A refresh token in the settings seeds the session so the
    /// authorization-code exchange can be skipped.
    pub fn from_settings(settings: &Settings, authorization_code: Option<String>) -> Self {
        let mut session = SessionState::new(
            settings.app_id.clone(),
            settings.app_secret.expose_secret().clone(),
        )
        .with_authorized_users(settings.authorized_user_ids());
        session.authorization_code = authorization_code.filter(|code| !code.is_empty());
        session.refresh_token = settings.refresh_token.clone().filter(|token| !token.is_empty());
        session
    }

    /// Set the collaborator list
    pub fn with_authorized_users(mut self, user_ids: Vec<String>) -> Self {
        self.authorized_user_ids = user_ids;
        self
    }

    /// Set the one-time authorization code
    pub fn with_authorization_code(mut self, code: impl Into<String>) -> Self {
        self.authorization_code = Some(code.into());
        self
    }

    /// Seed a refresh token issued by an earlier run
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    pub(crate) fn app_secret(&self) -> &str {
        self.app_secret.expose_secret()
    }

    /// Bearer value for app-scoped calls
    ///
    /// Empty when the app token call failed; the platform then rejects
    /// every call that uses it.
    pub(crate) fn app_bearer(&self) -> String {
        self.app_access_token.clone().unwrap_or_default()
    }

    /// Bearer value for user-scoped calls, empty when no user token exists
    pub(crate) fn user_bearer(&self) -> String {
        self.user_access_token.clone().unwrap_or_default()
    }
}
