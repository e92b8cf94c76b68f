use crate::global_constants;

/// Visible UI state of one submission cycle. Exactly one phase is
/// rendered at a time, so a success panel and an error panel can never
/// be shown together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Validating,
    InFlight,
    Success { image: String },
    Failed { message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadEvent {
    SubmitRequested,
    ValidationFailed { message: String },
    Validated,
    Completed { image: String },
    Errored { message: String },
}

impl UploadPhase {
    /// Single transition function over all phase/event pairs. Events that
    /// do not apply in the current phase are ignored and logged.
    pub fn transition(self, event: UploadEvent) -> UploadPhase {
        match (self, event) {
            (UploadPhase::Idle, UploadEvent::SubmitRequested)
            | (UploadPhase::Success { .. }, UploadEvent::SubmitRequested)
            | (UploadPhase::Failed { .. }, UploadEvent::SubmitRequested) => UploadPhase::Validating,
            (UploadPhase::Validating, UploadEvent::ValidationFailed { message }) => {
                UploadPhase::Failed { message }
            }
            (UploadPhase::Validating, UploadEvent::Validated) => UploadPhase::InFlight,
            (UploadPhase::InFlight, UploadEvent::Completed { image }) => {
                UploadPhase::Success { image }
            }
            (UploadPhase::InFlight, UploadEvent::Errored { message }) => {
                UploadPhase::Failed { message }
            }
            (phase, event) => {
                log::warn!(
                    "{} ignoring event {:?} in phase {:?}",
                    global_constants::LOG_TAG_PHASE,
                    event,
                    phase
                );
                phase
            }
        }
    }

    /// Idle-equivalent phases accept a new submission.
    pub fn accepts_submission(&self) -> bool {
        matches!(
            self,
            UploadPhase::Idle | UploadPhase::Success { .. } | UploadPhase::Failed { .. }
        )
    }
}
