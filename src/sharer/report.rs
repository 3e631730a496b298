//! Outcomes reported by each step of a sharing run

use std::fmt;

use secrecy::SecretString;

use crate::types::{DirectoryUser, RecordingRef};

use super::WorkflowState;

/// Envelope code reported for a message that got no platform response
///
/// Used when the send was skipped or failed below the API layer.
pub const NO_RESPONSE_CODE: i64 = -1;

/// Result of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
}

impl StepOutcome {
    pub fn failed(reason: impl fmt::Display) -> Self {
        StepOutcome::Failed(reason.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

/// Result of the recording lookup poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateOutcome {
    /// The located recording, if it appeared within the poll window
    pub recording: Option<RecordingRef>,
    /// Number of lookup calls made
    pub attempts: u32,
}

/// What happened to one configured collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorStatus {
    /// The grant call was rejected; the next collaborator was still processed
    GrantFailed(String),
    /// The grant succeeded but the directory lookup failed; processing stopped
    LookupFailed(String),
    /// Granted and resolved; `notify_code` is the message envelope code (0 = sent)
    Granted { user: DirectoryUser, notify_code: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorOutcome {
    pub user_id: String,
    pub status: CollaboratorStatus,
}

impl CollaboratorOutcome {
    /// True when the collaborator was granted and the message was sent
    pub fn is_notified(&self) -> bool {
        matches!(self.status, CollaboratorStatus::Granted { notify_code: 0, .. })
    }
}

/// Result of processing the collaborator list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantReport {
    /// One entry per processed collaborator, in list order
    pub outcomes: Vec<CollaboratorOutcome>,
    /// Index of the collaborator whose directory lookup failed, when the
    /// rest of the list was skipped
    pub aborted_at: Option<usize>,
}

impl GrantReport {
    pub fn is_truncated(&self) -> bool {
        self.aborted_at.is_some()
    }

    /// True when every processed collaborator was granted and notified and
    /// none were skipped
    pub fn all_notified(&self) -> bool {
        !self.is_truncated() && self.outcomes.iter().all(CollaboratorOutcome::is_notified)
    }
}

/// Everything a sharing run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub meeting_id: String,
    pub app_token: StepOutcome,
    pub user_token: StepOutcome,
    pub locate: LocateOutcome,
    pub collaborators: GrantReport,
    pub public_link: StepOutcome,
    /// Refresh token held at the end of the run
    ///
    /// A successful refresh invalidates the token it was given, so the next
    /// run must be seeded with this one.
    pub refresh_token: Option<SecretString>,
    /// Always `Done`: steps advance whether or not the previous one succeeded
    pub final_state: WorkflowState,
}

impl RunReport {
    pub fn recording(&self) -> Option<&RecordingRef> {
        self.locate.recording.as_ref()
    }

    /// True when every step succeeded for every collaborator
    pub fn is_success(&self) -> bool {
        self.app_token.is_success()
            && self.user_token.is_success()
            && self.locate.recording.is_some()
            && self.collaborators.all_notified()
            && self.public_link.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted(user_id: &str, notify_code: i64) -> CollaboratorOutcome {
        CollaboratorOutcome {
            user_id: user_id.to_string(),
            status: CollaboratorStatus::Granted {
                user: DirectoryUser::new(user_id, "Name"),
                notify_code,
            },
        }
    }

    #[test]
    fn test_notified_polarity() {
        // 0 means the message went out; anything else is a failure
        assert!(granted("u1", 0).is_notified());
        assert!(!granted("u1", 230002).is_notified());
        assert!(!granted("u1", NO_RESPONSE_CODE).is_notified());
    }

    #[test]
    fn test_truncated_report_is_not_all_notified() {
        let report = GrantReport {
            outcomes: vec![granted("u1", 0)],
            aborted_at: Some(1),
        };
        assert!(report.is_truncated());
        assert!(!report.all_notified());
    }

    #[test]
    fn test_empty_report_is_all_notified() {
        assert!(GrantReport::default().all_notified());
    }
}
