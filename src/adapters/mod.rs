mod desktop_image_source;
mod ocr_text_recognizer;
mod rfd_image_library;
mod tesseract_ocr_service;
mod xcap_camera_capture;

pub use desktop_image_source::DesktopImageSource;
pub use ocr_text_recognizer::OcrTextRecognizer;
pub use rfd_image_library::RfdImageLibrary;
pub use tesseract_ocr_service::TesseractOcrService;
pub use xcap_camera_capture::XcapCameraCapture;
