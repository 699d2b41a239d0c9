mod capture_buffer;
mod image_reference;
mod ocr;
mod pointer_location;
mod user_settings;

pub use capture_buffer::CaptureBuffer;
pub use image_reference::{ImageReference, ImageSourceMode, RecognizedText};
pub use ocr::{DetectedText, DetectedWord, OcrResult};
pub use pointer_location::PointerLocation;
pub use user_settings::{ThemeMode, UserSettings};
