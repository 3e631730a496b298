//! Recording lookup and the poll loop around it

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::platforms::MeetingPlatform;

use super::report::LocateOutcome;
use super::RecordingSharer;

/// Waits between recording lookups
///
/// Injected so tests can simulate a recording that appears on a given
/// attempt without real delay.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Schedule of recording lookups
///
/// The lookup endpoint allows 50 calls per second and 1000 per minute. The
/// default (200 attempts, 50 ms apart) stays at 20 per second and ends after
/// about ten seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of lookups
    pub attempts: u32,
    /// Fixed wait between lookups
    pub interval: Duration,
    /// Wait before the first lookup; recordings take a while to appear
    pub initial_delay: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy {
            attempts: 200,
            interval: Duration::from_millis(50),
            initial_delay: Duration::from_secs(5),
        }
    }
}

impl<P: MeetingPlatform, S: Sleeper> RecordingSharer<P, S> {
    /// Look up the meeting's recording once
    ///
    /// # Returns
    /// `true` when the recording exists; its object token is then stored in
    /// the session. `false` when it is not available yet, including when the
    /// lookup itself failed.
    pub async fn locate_recording(&mut self, meeting_id: &str) -> bool {
        let token = self.session.app_bearer();
        match self.platform.get_recording(&token, meeting_id).await {
            Ok(Some(recording)) => {
                let reference = recording.reference();
                info!(
                    recording = %reference,
                    url = %reference.public_url(&self.minutes_base_url),
                    "Recording located"
                );
                self.session.recording = Some(reference);
                true
            }
            Ok(None) => false,
            Err(e) => {
                debug!(meeting_id, error = %e, "Recording lookup failed");
                false
            }
        }
    }

    /// Poll until the recording appears or the attempts run out
    ///
    /// Stops on the first successful lookup. Running out is not an error:
    /// the session keeps no recording and later steps target an empty one.
    pub async fn poll_recording(&mut self, meeting_id: &str) -> LocateOutcome {
        if !self.poll.initial_delay.is_zero() {
            self.sleeper.sleep(self.poll.initial_delay).await;
        }

        for attempt in 1..=self.poll.attempts {
            debug!(meeting_id, attempt, "Looking up recording");
            if self.locate_recording(meeting_id).await {
                return LocateOutcome {
                    recording: self.session.recording.clone(),
                    attempts: attempt,
                };
            }
            if attempt < self.poll.attempts {
                self.sleeper.sleep(self.poll.interval).await;
            }
        }

        warn!(
            meeting_id,
            attempts = self.poll.attempts,
            "Recording did not become available"
        );
        LocateOutcome {
            recording: None,
            attempts: self.poll.attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sharer::fake::{Call, FakePlatform, RecordingSleeper, RECORDING_REF, RECORDING_URL};
    use crate::sharer::SessionState;

    fn sharer(platform: FakePlatform, poll: PollPolicy) -> RecordingSharer<FakePlatform, RecordingSleeper> {
        RecordingSharer::new(platform, SessionState::new("cli_a1", "s3cret"))
            .with_poll_policy(poll)
            .with_sleeper(RecordingSleeper::default())
    }

    #[tokio::test]
    async fn test_locate_not_ready() {
        let mut sharer = sharer(FakePlatform::new(), PollPolicy::default());

        assert!(!sharer.locate_recording("M").await);
        assert!(sharer.session().recording.is_none());
    }

    #[tokio::test]
    async fn test_locate_extracts_trailing_token() {
        let platform = FakePlatform::new().with_recording_url(RECORDING_URL);
        let mut sharer = sharer(platform, PollPolicy::default());

        assert!(sharer.locate_recording("M").await);
        assert_eq!(sharer.session().recording.as_ref().unwrap().as_str(), RECORDING_REF);
    }

    #[tokio::test]
    async fn test_lookup_error_counts_as_not_ready() {
        let platform = FakePlatform::new().with_recording_url(RECORDING_URL).failing_recording_lookup();
        let mut sharer = sharer(platform, PollPolicy::default());

        assert!(!sharer.locate_recording("M").await);
        assert!(sharer.session().recording.is_none());
    }

    #[tokio::test]
    async fn test_poll_stops_on_attempt_seven() {
        let platform = FakePlatform::new()
            .with_recording_url(RECORDING_URL)
            .recording_ready_on(7);
        let mut sharer = sharer(platform, PollPolicy::default());

        let outcome = sharer.poll_recording("M").await;

        assert_eq!(outcome.attempts, 7);
        assert_eq!(outcome.recording.unwrap().as_str(), RECORDING_REF);
        assert_eq!(
            sharer.platform().count(|c| matches!(c, Call::GetRecording { .. })),
            7
        );

        // Initial delay, then one interval after each of the six misses
        let mut expected = vec![Duration::from_secs(5)];
        expected.extend(std::iter::repeat(Duration::from_millis(50)).take(6));
        assert_eq!(sharer.sleeper().slept(), expected);
    }

    #[tokio::test]
    async fn test_poll_gives_up_after_all_attempts() {
        let mut sharer = sharer(FakePlatform::new(), PollPolicy::default());

        let outcome = sharer.poll_recording("M").await;

        assert_eq!(outcome, LocateOutcome { recording: None, attempts: 200 });
        assert_eq!(
            sharer.platform().count(|c| matches!(c, Call::GetRecording { .. })),
            200
        );
        // Initial delay and 199 intervals, no wait after the last miss
        assert_eq!(sharer.sleeper().slept().len(), 200);
    }

    #[tokio::test]
    async fn test_ready_on_last_attempt() {
        let platform = FakePlatform::new()
            .with_recording_url(RECORDING_URL)
            .recording_ready_on(200);
        let mut sharer = sharer(platform, PollPolicy::default());

        let outcome = sharer.poll_recording("M").await;
        assert_eq!(outcome.attempts, 200);
        assert!(outcome.recording.is_some());
    }

    #[test]
    fn test_default_policy_respects_rate_limit() {
        let policy = PollPolicy::default();
        let per_second = 1000 / policy.interval.as_millis();
        assert!(per_second <= 50);
        assert!(policy.interval * policy.attempts <= Duration::from_secs(10));
    }
}
