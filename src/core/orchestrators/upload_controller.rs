use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::core::interfaces::adapters::{ProcessingError, ProcessingService};
use crate::core::interfaces::ports::{ResultWriter, UploadPresenter};
use crate::core::models::{ProcessedImage, Submission, UploadEvent, UploadPhase};
use crate::global_constants;

#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Precondition failure detected before any network call.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Drives one submission cycle at a time: validates the submission,
/// performs the HTTP exchange through the injected service, and walks
/// the presenter through the phase state machine. Owns the
/// "current result" slot the download operation reads from.
pub struct UploadController {
    processing_service: Arc<dyn ProcessingService>,
    presenter: Arc<dyn UploadPresenter>,
    result_writer: Arc<dyn ResultWriter>,
    phase: UploadPhase,
    current_result: Option<ProcessedImage>,
}

impl UploadController {
    pub fn build(
        processing_service: Arc<dyn ProcessingService>,
        presenter: Arc<dyn UploadPresenter>,
        result_writer: Arc<dyn ResultWriter>,
    ) -> Self {
        Self {
            processing_service,
            presenter,
            result_writer,
            phase: UploadPhase::Idle,
            current_result: None,
        }
    }

    /// Runs one submission. The submit control is disabled for the
    /// duration and re-enabled exactly once on every exit path.
    pub async fn submit(&mut self, submission: Submission) -> Result<(), SubmissionError> {
        if !self.phase.accepts_submission() {
            log::warn!(
                "{} submission rejected while {:?}",
                global_constants::LOG_TAG_CONTROLLER,
                self.phase
            );
            return Ok(());
        }

        log::info!(
            "{} starting submission: {:?}",
            global_constants::LOG_TAG_CONTROLLER,
            submission
        );

        self.apply_event(UploadEvent::SubmitRequested);

        self.presenter.set_submit_enabled(false);
        let outcome = self.run_submission(submission).await;
        self.presenter.set_submit_enabled(true);

        outcome
    }

    async fn run_submission(&mut self, submission: Submission) -> Result<(), SubmissionError> {
        if !submission.has_image() {
            let message = global_constants::MESSAGE_VALIDATION_NO_IMAGE.to_string();
            log::warn!(
                "{} validation failed: no image selected",
                global_constants::LOG_TAG_CONTROLLER
            );
            self.apply_event(UploadEvent::ValidationFailed {
                message: message.clone(),
            });
            return Err(SubmissionError::Validation(message));
        }

        self.apply_event(UploadEvent::Validated);

        match self.processing_service.process(&submission).await {
            Ok(processed) => {
                log::info!(
                    "{} submission succeeded: {:?}",
                    global_constants::LOG_TAG_CONTROLLER,
                    processed
                );
                self.apply_event(UploadEvent::Completed {
                    image: processed.as_payload_str().to_string(),
                });
                self.current_result = Some(processed);
                Ok(())
            }
            Err(error) => {
                log::error!(
                    "{} submission failed: {}",
                    global_constants::LOG_TAG_CONTROLLER,
                    error
                );
                self.apply_event(UploadEvent::Errored {
                    message: error.to_string(),
                });
                Err(SubmissionError::Processing(error))
            }
        }
    }

    /// Saves the most recent successful result through the writer. With
    /// no prior result the presenter is notified and nothing is written.
    pub fn download_current_result(&self) -> Result<Option<PathBuf>> {
        let Some(processed) = &self.current_result else {
            log::info!(
                "{} download requested with no result",
                global_constants::LOG_TAG_CONTROLLER
            );
            self.presenter
                .notify(global_constants::MESSAGE_NOTHING_TO_DOWNLOAD);
            return Ok(None);
        };

        let bytes = processed.decode_bytes()?;
        let file_name = format!(
            "{}{}.{}",
            global_constants::DOWNLOAD_FILE_PREFIX,
            unix_timestamp_millis(),
            global_constants::DOWNLOAD_FILE_EXTENSION
        );

        let path = self
            .result_writer
            .write(&file_name, &bytes)
            .with_context(|| format!("failed to save {}", file_name))?;

        log::info!(
            "{} result saved to {:?}",
            global_constants::LOG_TAG_CONTROLLER,
            path
        );
        Ok(Some(path))
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn current_result(&self) -> Option<&ProcessedImage> {
        self.current_result.as_ref()
    }

    fn apply_event(&mut self, event: UploadEvent) {
        self.phase = self.phase.clone().transition(event);
        self.presenter.render_phase(&self.phase);
    }
}

fn unix_timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0)
}
