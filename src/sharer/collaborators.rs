//! Collaborator grants and link notifications

use tracing::{info, warn};

use crate::platforms::MeetingPlatform;
use crate::types::RecordingRef;

use super::locator::Sleeper;
use super::report::{CollaboratorOutcome, CollaboratorStatus, GrantReport, NO_RESPONSE_CODE};
use super::RecordingSharer;

impl<P: MeetingPlatform, S: Sleeper> RecordingSharer<P, S> {
    /// Grant every listed user view access and message them the link
    ///
    /// Users are processed in list order. A rejected grant is logged and the
    /// next user is processed. A failed directory lookup stops processing:
    /// the users after it get no calls at all, and `aborted_at` records where
    /// it stopped.
    pub async fn grant_all(&mut self, meeting_id: &str, user_ids: &[String]) -> GrantReport {
        let user_token = self.session.user_bearer();
        let recording = self.session.recording.clone().unwrap_or_default();
        let mut report = GrantReport::default();

        for (index, user_id) in user_ids.iter().enumerate() {
            if let Err(e) = self
                .platform
                .add_recording_viewer(&user_token, meeting_id, user_id)
                .await
            {
                warn!(user_id = %user_id, error = %e, "Failed to add collaborator");
                report.outcomes.push(CollaboratorOutcome {
                    user_id: user_id.clone(),
                    status: CollaboratorStatus::GrantFailed(e.to_string()),
                });
                continue;
            }

            let user = match self.platform.get_user(&user_token, user_id).await {
                Ok(user) => user,
                Err(e) => {
                    warn!(
                        user_id = %user_id,
                        error = %e,
                        skipped = user_ids.len() - index - 1,
                        "Failed to add collaborator, check that the user exists"
                    );
                    report.outcomes.push(CollaboratorOutcome {
                        user_id: user_id.clone(),
                        status: CollaboratorStatus::LookupFailed(e.to_string()),
                    });
                    report.aborted_at = Some(index);
                    return report;
                }
            };
            info!(user_id = %user_id, name = %user.name, "Added collaborator");

            let notify_code = self.notify(user_id, &recording).await;
            if notify_code != 0 {
                warn!(name = %user.name, code = notify_code, "Failed to send recording link");
            } else {
                info!(name = %user.name, "Sent recording link");
            }

            report.outcomes.push(CollaboratorOutcome {
                user_id: user_id.clone(),
                status: CollaboratorStatus::Granted { user, notify_code },
            });
        }

        report
    }

    /// Message one user the recording's public link
    ///
    /// Fetches a new tenant token for every message. If that fails nothing
    /// is sent.
    ///
    /// # Returns
    /// The message call's envelope code: 0 when sent, the platform's code
    /// when rejected, [`NO_RESPONSE_CODE`] when there was no response
    pub async fn notify(&mut self, recipient_id: &str, recording: &RecordingRef) -> i64 {
        let Some(tenant_token) = self.acquire_tenant_token().await else {
            return NO_RESPONSE_CODE;
        };

        let text = recording.public_url(&self.minutes_base_url);
        match self
            .platform
            .send_text_message(&tenant_token, recipient_id, &text)
            .await
        {
            Ok(_) => 0,
            Err(e) => e.api_code().unwrap_or(NO_RESPONSE_CODE),
        }
    }
}
