#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Background Studio - Desktop";

pub const PROCESSING_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const PROCESSING_API_PATH: &str = "/api/process/";

pub const DEFAULT_BACKGROUND_TYPE: &str = "color";
pub const DEFAULT_BACKGROUND_VALUE: &str = "#FFFFFF";
pub const DEFAULT_MODEL: &str = "u2net";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_CONTROLLER: &str = "[UPLOAD]";
pub const LOG_TAG_REMOTE: &str = "[REMOTE]";
pub const LOG_TAG_PRESENTER: &str = "[PRESENTER]";
pub const LOG_TAG_WRITER: &str = "[WRITER]";
pub const LOG_TAG_PHASE: &str = "[PHASE]";

pub const MESSAGE_VALIDATION_NO_IMAGE: &str = "Please select an image first!";
pub const MESSAGE_PROCESSING_WAIT: &str = "Processing... please wait";
pub const MESSAGE_NO_IMAGE_RETURNED: &str = "No image returned";
pub const MESSAGE_NOTHING_TO_DOWNLOAD: &str = "No image to download";

pub const USER_MESSAGE_ERROR_PREFIX: &str = "[ERROR] ";
pub const USER_MESSAGE_RESULT_READY: &str = "[SUCCESS] Image processed successfully!";

pub const DOWNLOAD_FILE_PREFIX: &str = "processed_image_";
pub const DOWNLOAD_FILE_EXTENSION: &str = "png";

pub const DATA_URI_BASE64_MARKER: &str = ";base64,";

pub const MULTIPART_FIELD_IMAGE: &str = "image";
pub const MULTIPART_FIELD_BACKGROUND_TYPE: &str = "background_type";
pub const MULTIPART_FIELD_BACKGROUND_VALUE: &str = "background_value";
pub const MULTIPART_FIELD_MODEL: &str = "model";
