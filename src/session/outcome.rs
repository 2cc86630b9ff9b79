use crate::error::ClientError;
use crate::model::ConstraintViolation;
use crate::model::ValidationErrors;

/// How one call to `RegisterSession::submit` ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were published; nothing was sent.
    Invalid(ValidationErrors),
    /// The input surface refused the username; nothing was sent.
    Blocked(ConstraintViolation),
    /// Another submission is still in flight.
    Busy,
    /// The server accepted the registration and the redirect is scheduled.
    Registered,
    Rejected { status: u16, message: String },
    NetworkFailed(ClientError),
    /// The session was torn down or has already handed over to the navigator.
    Closed,
}

impl SubmitOutcome {
    pub fn sent_request(&self) -> bool {
        matches!(
            self,
            SubmitOutcome::Registered | SubmitOutcome::Rejected { .. } | SubmitOutcome::NetworkFailed(_)
        )
    }
}
