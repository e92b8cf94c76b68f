use async_trait::async_trait;
use serde::Deserialize;

use crate::core::interfaces::adapters::{ProcessingError, ProcessingService};
use crate::core::models::{ProcessedImage, Submission};
use crate::global_constants;

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    image: Option<String>,
    error: Option<String>,
}

/// Talks to the background-processing API over HTTP. One multipart POST
/// per submission; no retry, no client-side timeout, no cancellation.
pub struct RemoteProcessingService {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteProcessingService {
    pub fn build(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            global_constants::PROCESSING_API_PATH
        )
    }

    fn build_form(submission: &Submission) -> Result<reqwest::multipart::Form, ProcessingError> {
        let mime = mime_guess::from_path(&submission.file_name).first_or_octet_stream();

        let image_part = reqwest::multipart::Part::bytes(submission.image_bytes.clone())
            .file_name(submission.file_name.clone())
            .mime_str(mime.essence_str())
            .map_err(|e| ProcessingError::Transport(e.to_string()))?;

        Ok(reqwest::multipart::Form::new()
            .part(global_constants::MULTIPART_FIELD_IMAGE, image_part)
            .text(
                global_constants::MULTIPART_FIELD_BACKGROUND_TYPE,
                submission.background_mode.as_wire_str(),
            )
            .text(
                global_constants::MULTIPART_FIELD_BACKGROUND_VALUE,
                submission.background_value.clone(),
            )
            .text(
                global_constants::MULTIPART_FIELD_MODEL,
                submission.model.clone(),
            ))
    }

    fn parse_success_body(body: &str) -> Result<ProcessedImage, ProcessingError> {
        let response: ProcessResponse = serde_json::from_str(body)
            .map_err(|e| ProcessingError::Transport(format!("invalid service response: {}", e)))?;

        match response.image {
            Some(image) => Ok(ProcessedImage::from_payload(image)),
            None => Err(ProcessingError::Application(
                response
                    .error
                    .unwrap_or_else(|| global_constants::MESSAGE_NO_IMAGE_RETURNED.to_string()),
            )),
        }
    }
}

#[async_trait]
impl ProcessingService for RemoteProcessingService {
    async fn process(&self, submission: &Submission) -> Result<ProcessedImage, ProcessingError> {
        let url = self.endpoint_url();
        log::info!("{} sending to: {}", global_constants::LOG_TAG_REMOTE, url);

        let form = Self::build_form(submission)?;

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| ProcessingError::Transport(e.to_string()))?;

        let status = response.status();
        log::debug!(
            "{} response status: {}",
            global_constants::LOG_TAG_REMOTE,
            status
        );

        let body = response
            .text()
            .await
            .map_err(|e| ProcessingError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ProcessingError::Request {
                status: status.as_u16(),
                body,
            });
        }

        Self::parse_success_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::BackgroundMode;

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let service = RemoteProcessingService::build("http://127.0.0.1:8000".to_string());
        assert_eq!(service.endpoint_url(), "http://127.0.0.1:8000/api/process/");
    }

    #[test]
    fn test_endpoint_url_tolerates_trailing_slash() {
        let service = RemoteProcessingService::build("http://127.0.0.1:8000/".to_string());
        assert_eq!(service.endpoint_url(), "http://127.0.0.1:8000/api/process/");
    }

    #[test]
    fn test_parse_success_body_with_image_field() {
        let parsed = RemoteProcessingService::parse_success_body(
            r#"{"image":"data:image/png;base64,AAAA","status":"SUCCESS"}"#,
        )
        .unwrap();
        assert_eq!(parsed.as_payload_str(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_parse_success_body_uses_service_error_message() {
        let error = RemoteProcessingService::parse_success_body(r#"{"error":"File too large"}"#)
            .unwrap_err();
        assert!(matches!(error, ProcessingError::Application(ref m) if m == "File too large"));
    }

    #[test]
    fn test_parse_success_body_falls_back_without_error_field() {
        let error = RemoteProcessingService::parse_success_body(r#"{"status":"SUCCESS"}"#)
            .unwrap_err();
        assert!(matches!(error, ProcessingError::Application(ref m) if m == "No image returned"));
    }

    #[test]
    fn test_parse_success_body_rejects_non_json() {
        let error = RemoteProcessingService::parse_success_body("<html>oops</html>").unwrap_err();
        assert!(matches!(error, ProcessingError::Transport(_)));
    }

    #[test]
    fn test_build_form_accepts_png_submission() {
        let submission = Submission::build(
            vec![0x89, 0x50, 0x4E, 0x47],
            "cat.png".to_string(),
            BackgroundMode::Color,
            "#ffffff".to_string(),
            "u2net".to_string(),
        );
        assert!(RemoteProcessingService::build_form(&submission).is_ok());
    }
}
