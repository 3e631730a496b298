//! Scripted platform and sleeper for sharer tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, ErrorCode, Result};
use crate::platforms::MeetingPlatform;
use crate::types::{AccessToken, DirectoryUser, Recording, RecordingRef, UserToken};

use super::locator::Sleeper;

pub(crate) const RECORDING_URL: &str = "https://meetings.feishu.cn/minutes/abcdef0123456789abcdef01";
pub(crate) const RECORDING_REF: &str = "abcdef0123456789abcdef01";

/// A call received by [`FakePlatform`], with the bearer it carried
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    AppToken,
    TenantToken,
    ExchangeCode { app_token: String, code: String },
    Refresh { app_token: String, refresh_token: String },
    GetRecording { token: String, meeting_id: String },
    AddViewer { token: String, meeting_id: String, user_id: String },
    MakePublic { token: String, recording: String },
    GetUser { token: String, user_id: String },
    SendText { token: String, receive_id: String, text: String },
}

/// Platform double that answers from a script and records every call
///
/// Tokens: app `a-token`, tenant `t-token`, code exchange `u-1`/`ur-1`,
/// refresh `u-2`/`ur-2`.
#[derive(Default)]
pub(crate) struct FakePlatform {
    calls: Mutex<Vec<Call>>,
    recording_url: Option<String>,
    ready_on: u32,
    fail_app_token: bool,
    fail_tenant_token: bool,
    fail_code_exchange: bool,
    fail_refresh: bool,
    fail_recording_lookup: bool,
    fail_make_public: bool,
    grant_failures: Vec<String>,
    lookup_failures: Vec<String>,
    message_failures: HashMap<String, i64>,
}

fn rejected(code: i64) -> Error {
    Error::rejected(code, "rejected by fake platform")
}

impl FakePlatform {
    pub(crate) fn new() -> Self {
        FakePlatform {
            ready_on: 1,
            ..Default::default()
        }
    }

    pub(crate) fn with_recording_url(mut self, url: &str) -> Self {
        self.recording_url = Some(url.to_string());
        self
    }

    /// The recording lookup returns nothing before this attempt
    pub(crate) fn recording_ready_on(mut self, attempt: u32) -> Self {
        self.ready_on = attempt;
        self
    }

    pub(crate) fn failing_app_token(mut self) -> Self {
        self.fail_app_token = true;
        self
    }

    pub(crate) fn failing_tenant_token(mut self) -> Self {
        self.fail_tenant_token = true;
        self
    }

    pub(crate) fn failing_code_exchange(mut self) -> Self {
        self.fail_code_exchange = true;
        self
    }

    pub(crate) fn failing_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    pub(crate) fn failing_recording_lookup(mut self) -> Self {
        self.fail_recording_lookup = true;
        self
    }

    pub(crate) fn failing_make_public(mut self) -> Self {
        self.fail_make_public = true;
        self
    }

    pub(crate) fn failing_grant_for(mut self, user_id: &str) -> Self {
        self.grant_failures.push(user_id.to_string());
        self
    }

    pub(crate) fn failing_lookup_for(mut self, user_id: &str) -> Self {
        self.lookup_failures.push(user_id.to_string());
        self
    }

    pub(crate) fn failing_message_for(mut self, user_id: &str, code: i64) -> Self {
        self.message_failures.insert(user_id.to_string(), code);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MeetingPlatform for FakePlatform {
    async fn app_access_token(&self, _app_id: &str, _app_secret: &str) -> Result<AccessToken> {
        self.record(Call::AppToken);
        if self.fail_app_token {
            return Err(rejected(10014));
        }
        Ok(AccessToken::new("a-token", 7200))
    }

    async fn tenant_access_token(&self, _app_id: &str, _app_secret: &str) -> Result<AccessToken> {
        self.record(Call::TenantToken);
        if self.fail_tenant_token {
            return Err(rejected(10014));
        }
        Ok(AccessToken::new("t-token", 7200))
    }

    async fn exchange_authorization_code(&self, app_token: &str, code: &str) -> Result<UserToken> {
        self.record(Call::ExchangeCode {
            app_token: app_token.to_string(),
            code: code.to_string(),
        });
        if self.fail_code_exchange {
            return Err(rejected(20003));
        }
        Ok(UserToken::new("u-1", "ur-1"))
    }

    async fn refresh_user_token(&self, app_token: &str, refresh_token: &str) -> Result<UserToken> {
        self.record(Call::Refresh {
            app_token: app_token.to_string(),
            refresh_token: refresh_token.to_string(),
        });
        if self.fail_refresh {
            return Err(rejected(20026));
        }
        Ok(UserToken::new("u-2", "ur-2"))
    }

    async fn get_recording(&self, token: &str, meeting_id: &str) -> Result<Option<Recording>> {
        self.record(Call::GetRecording {
            token: token.to_string(),
            meeting_id: meeting_id.to_string(),
        });
        if self.fail_recording_lookup {
            return Err(Error::new(ErrorCode::NetworkError, "connection reset"));
        }
        let attempt = self.count(|c| matches!(c, Call::GetRecording { .. })) as u32;
        if attempt < self.ready_on {
            return Ok(None);
        }
        Ok(self.recording_url.as_deref().map(Recording::new))
    }

    async fn add_recording_viewer(&self, user_token: &str, meeting_id: &str, user_id: &str) -> Result<()> {
        self.record(Call::AddViewer {
            token: user_token.to_string(),
            meeting_id: meeting_id.to_string(),
            user_id: user_id.to_string(),
        });
        if self.grant_failures.iter().any(|id| id == user_id) {
            return Err(rejected(121001));
        }
        Ok(())
    }

    async fn make_recording_public(&self, user_token: &str, recording: &RecordingRef) -> Result<()> {
        self.record(Call::MakePublic {
            token: user_token.to_string(),
            recording: recording.as_str().to_string(),
        });
        if self.fail_make_public || recording.is_empty() {
            return Err(rejected(1063001));
        }
        Ok(())
    }

    async fn get_user(&self, token: &str, user_id: &str) -> Result<DirectoryUser> {
        self.record(Call::GetUser {
            token: token.to_string(),
            user_id: user_id.to_string(),
        });
        if self.lookup_failures.iter().any(|id| id == user_id) {
            return Err(rejected(41050));
        }
        Ok(DirectoryUser::new(user_id, format!("Name of {user_id}")))
    }

    async fn send_text_message(&self, tenant_token: &str, receive_id: &str, text: &str) -> Result<String> {
        self.record(Call::SendText {
            token: tenant_token.to_string(),
            receive_id: receive_id.to_string(),
            text: text.to_string(),
        });
        if let Some(code) = self.message_failures.get(receive_id) {
            return Err(rejected(*code));
        }
        Ok(format!("om_{receive_id}"))
    }
}

/// Sleeper that returns immediately and remembers what it was asked
#[derive(Default)]
pub(crate) struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub(crate) fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
