use async_trait::async_trait;
use thiserror::Error;

use crate::core::models::{ProcessedImage, Submission};

#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Non-2xx response, carrying the status and raw body text.
    #[error("HTTP {status}: {body}")]
    Request { status: u16, body: String },

    /// 2xx response but the service reported failure or omitted the
    /// expected image field.
    #[error("{0}")]
    Application(String),

    /// Network failure or an unparseable response body.
    #[error("{0}")]
    Transport(String),
}

/// Seam to the remote background-processing service.
#[async_trait]
pub trait ProcessingService: Send + Sync {
    async fn process(&self, submission: &Submission) -> Result<ProcessedImage, ProcessingError>;
}
