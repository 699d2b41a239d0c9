mod image_source_provider;
mod ocr_service;
mod text_recognizer;

pub use image_source_provider::ImageSourceProvider;
pub use ocr_service::OcrService;
pub use text_recognizer::TextRecognizer;
