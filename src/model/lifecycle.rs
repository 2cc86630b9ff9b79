/// Where a registration session currently is.
///
/// `Validating` is only ever held synchronously inside one submit call. `Redirecting` is terminal:
/// the session has handed control to the navigator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Idle,
    Validating,
    Submitting,
    Redirecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    SubmitRequested,
    ValidationFailed,
    ValidationPassed,
    Succeeded,
    Failed,
}

/// The busy flag guarding against a second request while one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl Lifecycle {
    /// Next state for `event`, or `None` when the event is not allowed from here.
    pub fn next(
        self,
        event: LifecycleEvent,
    ) -> Option<Lifecycle> {
        use Lifecycle::*;
        use LifecycleEvent::*;

        match (self, event) {
            (Idle, SubmitRequested) => Some(Validating),
            (Validating, ValidationFailed) => Some(Idle),
            (Validating, ValidationPassed) => Some(Submitting),
            (Submitting, Succeeded) => Some(Redirecting),
            (Submitting, Failed) => Some(Idle),
            _ => None,
        }
    }

    pub fn accepts_submit(self) -> bool {
        self == Lifecycle::Idle
    }

    pub fn is_terminal(self) -> bool {
        self == Lifecycle::Redirecting
    }

    pub fn submission_state(self) -> SubmissionState {
        match self {
            Lifecycle::Submitting => SubmissionState::Submitting,
            _ => SubmissionState::Idle,
        }
    }
}
