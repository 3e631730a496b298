use tracing::{info, warn};

use crate::platforms::MeetingPlatform;

use super::locator::Sleeper;
use super::report::StepOutcome;
use super::RecordingSharer;

impl<P: MeetingPlatform, S: Sleeper> RecordingSharer<P, S> {
    /// Open the recording's public link with the fixed sharing policy
    ///
    /// Acts as the user: the permission endpoint does not accept app
    /// tokens. Without a located recording the call targets an empty object
    /// token and the platform rejects it.
    pub async fn make_public(&mut self) -> StepOutcome {
        let recording = self.session.recording.clone().unwrap_or_default();
        let user_token = self.session.user_bearer();

        match self.platform.make_recording_public(&user_token, &recording).await {
            Ok(()) => {
                info!(recording = %recording, "Enabled link sharing");
                StepOutcome::Succeeded
            }
            Err(e) => {
                warn!(recording = %recording, error = %e, "Failed to enable link sharing");
                StepOutcome::failed(e)
            }
        }
    }
}
