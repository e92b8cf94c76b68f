use crate::core::interfaces::ports::UploadPresenter;
use crate::core::models::UploadPhase;
use crate::global_constants;

/// Renders the phase state machine as console output. The panels of the
/// original frontend become lines on stdout; the submit-enabled flag is
/// only logged since a CLI run has no button to grey out.
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl UploadPresenter for ConsolePresenter {
    fn render_phase(&self, phase: &UploadPhase) {
        match phase {
            UploadPhase::Idle | UploadPhase::Validating => {}
            UploadPhase::InFlight => {
                println!("{}", global_constants::MESSAGE_PROCESSING_WAIT);
            }
            UploadPhase::Success { image } => {
                println!("{}", global_constants::USER_MESSAGE_RESULT_READY);
                log::debug!(
                    "{} result payload ({} chars)",
                    global_constants::LOG_TAG_PRESENTER,
                    image.len()
                );
            }
            UploadPhase::Failed { message } => {
                eprintln!("{}{}", global_constants::USER_MESSAGE_ERROR_PREFIX, message);
            }
        }
    }

    fn set_submit_enabled(&self, enabled: bool) {
        log::debug!(
            "{} submit control enabled: {}",
            global_constants::LOG_TAG_PRESENTER,
            enabled
        );
    }

    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
