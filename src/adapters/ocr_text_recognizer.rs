use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::{OcrService, TextRecognizer};
use crate::core::models::{ImageReference, RecognizedText};

/// Turns an OCR engine into a recognizer of image references.
pub struct OcrTextRecognizer {
    ocr_service: Arc<dyn OcrService>,
}

impl OcrTextRecognizer {
    pub fn new(ocr_service: Arc<dyn OcrService>) -> Self {
        Self { ocr_service }
    }
}

#[async_trait]
impl TextRecognizer for OcrTextRecognizer {
    async fn recognize(&self, image: &ImageReference) -> Result<Option<RecognizedText>> {
        let result = self
            .ocr_service
            .extract_text_from_image(image.path())
            .await
            .with_context(|| format!("OCR failed for {}", image))?;

        match result.mean_confidence() {
            Some(confidence) => log::debug!(
                "[RECOGNIZER] {} lines ({} words) from {}, mean confidence {:.1}",
                result.text_blocks.len(),
                result.word_count(),
                image.file_name(),
                confidence
            ),
            None => log::debug!("[RECOGNIZER] no text lines in {}", image.file_name()),
        }

        Ok(RecognizedText::from_raw(&result.full_text))
    }
}
