pub const APPLICATION_TITLE: &str = "Photo Text Scanner";
pub const APPLICATION_DIR_NAME: &str = "photo-text-scanner";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_CLIPBOARD: &str = "[CLIPBOARD]";
pub const LOG_TAG_FLOW: &str = "[FLOW]";
pub const LOG_TAG_LIBRARY: &str = "[LIBRARY]";

pub const PLACEHOLDER_TEXT: &str = "No text recognized yet.";
pub const STALE_TEXT_HINT: &str = "(from previous image)";
pub const RECOGNIZING_HINT: &str = "Recognizing text...";

pub const BUTTON_PICK_IMAGE: &str = "PICK IMAGE";
pub const BUTTON_SCAN_IMAGE: &str = "SCAN IMAGE";
pub const BUTTON_COPY_TEXT: &str = "Copy Text";
pub const BUTTON_CLEAR: &str = "Clear";

pub const COPY_CONFIRMATION_TITLE: &str = "Text Copied";
pub const COPY_CONFIRMATION_BODY: &str = "The recognized text has been copied to clipboard!";
pub const NOTICE_DISMISS_DELAY_MS: u64 = 3000;

pub const DEFAULT_OCR_LANGUAGE: &str = "eng";

pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];
pub const CAPTURE_FILE_PREFIX: &str = "scan-";

pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const ERROR_CONTEXT_SCALE_FACTOR: &str = "Unable to get scale factor";
pub const ERROR_CONTEXT_CAPTURE_MONITOR: &str = "Unable to capture monitor";
