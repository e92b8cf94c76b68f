use anyhow::Result;
use base64::Engine;

use crate::global_constants;

/// The image payload returned by the processing service for the most
/// recent successful submission. The service sends either a
/// `data:image/png;base64,...` URI or a bare base64 string.
#[derive(Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    image: String,
}

impl std::fmt::Debug for ProcessedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcessedImage")
            .field("image_len", &self.image.len())
            .finish()
    }
}

impl ProcessedImage {
    pub fn from_payload(image: String) -> Self {
        Self { image }
    }

    /// The displayable reference exactly as the service returned it.
    pub fn as_payload_str(&self) -> &str {
        &self.image
    }

    /// Decodes the payload into raw image bytes for saving to disk.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let encoded = match self
            .image
            .split_once(global_constants::DATA_URI_BASE64_MARKER)
        {
            Some((_mime_prefix, rest)) => rest,
            None => self.image.as_str(),
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|e| anyhow::anyhow!("failed to decode image payload: {}", e))?;

        Ok(bytes)
    }
}
