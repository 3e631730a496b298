//! Recording sharer
//!
//! Drives one meeting's recording through the fixed sharing sequence:
//!
//! 1. obtain the app token, then the user token (code exchange and refresh)
//! 2. poll until the recording exists and take its object token
//! 3. grant each configured collaborator view access and message them the link
//! 4. open the recording's public link
//!
//! Steps run strictly one after another. A failed step is logged and
//! reported; the run still advances to the next step, which will usually be
//! rejected by the platform for lack of the missing token or recording.

mod collaborators;
mod credentials;
mod locator;
mod report;
mod session;
mod visibility;

#[cfg(test)]
pub(crate) mod fake;

use chrono::Local;
use secrecy::SecretString;
use tracing::{debug, info};

use crate::config::{Settings, DEFAULT_MINUTES_BASE_URL};
use crate::platforms::MeetingPlatform;

pub use locator::{PollPolicy, Sleeper, TokioSleeper};
pub use report::{
    CollaboratorOutcome, CollaboratorStatus, GrantReport, LocateOutcome, RunReport, StepOutcome,
    NO_RESPONSE_CODE,
};
pub use session::SessionState;

/// Position of a run in the sharing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Start,
    AppTokenAcquired,
    UserTokenAcquired,
    RecordingLocated,
    PermissionsGranted,
    PublicLinkSet,
    Done,
}

impl WorkflowState {
    /// The state after this one; transitions are unconditional
    pub fn next(self) -> Self {
        match self {
            WorkflowState::Start => WorkflowState::AppTokenAcquired,
            WorkflowState::AppTokenAcquired => WorkflowState::UserTokenAcquired,
            WorkflowState::UserTokenAcquired => WorkflowState::RecordingLocated,
            WorkflowState::RecordingLocated => WorkflowState::PermissionsGranted,
            WorkflowState::PermissionsGranted => WorkflowState::PublicLinkSet,
            WorkflowState::PublicLinkSet | WorkflowState::Done => WorkflowState::Done,
        }
    }
}

/// Orchestrates one sharing run against a meeting platform
///
/// An instance is scoped to a single run: it owns the session state the
/// steps produce and consume.
pub struct RecordingSharer<P, S = TokioSleeper> {
    platform: P,
    sleeper: S,
    session: SessionState,
    poll: PollPolicy,
    minutes_base_url: String,
}

impl<P: MeetingPlatform> RecordingSharer<P, TokioSleeper> {
    /// Create a sharer with the default poll policy and minutes link base
    pub fn new(platform: P, session: SessionState) -> Self {
        RecordingSharer {
            platform,
            sleeper: TokioSleeper,
            session,
            poll: PollPolicy::default(),
            minutes_base_url: DEFAULT_MINUTES_BASE_URL.to_string(),
        }
    }

    /// Create a sharer configured from loaded settings
    pub fn from_settings(platform: P, settings: &Settings, authorization_code: Option<String>) -> Self {
        RecordingSharer::new(platform, SessionState::from_settings(settings, authorization_code))
            .with_poll_policy(settings.poll_policy())
            .with_minutes_base_url(settings.minutes_base_url.clone())
    }
}

impl<P: MeetingPlatform, S: Sleeper> RecordingSharer<P, S> {
    /// Replace the sleeper used between recording lookups
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> RecordingSharer<P, T> {
        RecordingSharer {
            platform: self.platform,
            sleeper,
            session: self.session,
            poll: self.poll,
            minutes_base_url: self.minutes_base_url,
        }
    }

    pub fn with_poll_policy(mut self, poll: PollPolicy) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_minutes_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.minutes_base_url = base_url.into();
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn sleeper(&self) -> &S {
        &self.sleeper
    }

    /// Public link to the located recording
    ///
    /// Built from an empty object token when no recording was located.
    pub fn minutes_url(&self) -> String {
        self.session
            .recording
            .clone()
            .unwrap_or_default()
            .public_url(&self.minutes_base_url)
    }

    /// Share the recording of one finished meeting
    ///
    /// Always runs the full sequence and returns what each step did.
    pub async fn run(&mut self, meeting_id: &str) -> RunReport {
        info!(
            meeting_id,
            started_at = %Local::now().format("%Y-%m-%d %H:%M:%S"),
            "Meeting ended, sharing recording"
        );
        let mut state = WorkflowState::Start;

        let app_token = self.acquire_app_token().await;
        state = self.advance(state);

        let user_token = self.acquire_user_credentials().await;
        state = self.advance(state);

        let locate = self.poll_recording(meeting_id).await;
        state = self.advance(state);

        let user_ids = self.session.authorized_user_ids.clone();
        let collaborators = self.grant_all(meeting_id, &user_ids).await;
        state = self.advance(state);

        let public_link = self.make_public().await;
        state = self.advance(state);

        let final_state = self.advance(state);

        RunReport {
            meeting_id: meeting_id.to_string(),
            app_token,
            user_token,
            locate,
            collaborators,
            public_link,
            refresh_token: self.session.refresh_token.clone().map(SecretString::new),
            final_state,
        }
    }

    fn advance(&self, state: WorkflowState) -> WorkflowState {
        let next = state.next();
        debug!(from = ?state, to = ?next, "Workflow transition");
        next
    }
}
