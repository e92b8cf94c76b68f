mod processed_image;
mod submission;
mod upload_phase;

pub use processed_image::ProcessedImage;
pub use submission::{BackgroundMode, Submission};
pub use upload_phase::{UploadEvent, UploadPhase};
