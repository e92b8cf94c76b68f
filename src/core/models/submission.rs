use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the service should fill the area behind the subject.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BackgroundMode {
    Color,
    Remove,
}

impl BackgroundMode {
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            BackgroundMode::Color => "color",
            BackgroundMode::Remove => "remove",
        }
    }
}

impl Default for BackgroundMode {
    fn default() -> Self {
        BackgroundMode::Color
    }
}

impl fmt::Display for BackgroundMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_wire_str())
    }
}

impl FromStr for BackgroundMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("color") {
            Ok(BackgroundMode::Color)
        } else if value.eq_ignore_ascii_case("remove") {
            Ok(BackgroundMode::Remove)
        } else {
            Err(format!(
                "unknown background type '{}', expected 'color' or 'remove'",
                value
            ))
        }
    }
}

/// One user-initiated request to process an image. Built fresh per
/// invocation and discarded once the request completes.
#[derive(Clone)]
pub struct Submission {
    pub image_bytes: Vec<u8>,
    pub file_name: String,
    pub background_mode: BackgroundMode,
    pub background_value: String,
    pub model: String,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("file_name", &self.file_name)
            .field("image_size", &self.image_bytes.len())
            .field("background_mode", &self.background_mode)
            .field("background_value", &self.background_value)
            .field("model", &self.model)
            .finish()
    }
}

impl Submission {
    pub fn build(
        image_bytes: Vec<u8>,
        file_name: String,
        background_mode: BackgroundMode,
        background_value: String,
        model: String,
    ) -> Self {
        log::debug!(
            "[SUBMISSION] building submission: {} ({} bytes), mode={}, value={}, model={}",
            file_name,
            image_bytes.len(),
            background_mode,
            background_value,
            model
        );

        Self {
            image_bytes,
            file_name,
            background_mode,
            background_value,
            model,
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_bytes.is_empty()
    }
}
