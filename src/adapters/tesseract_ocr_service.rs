use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusty_tesseract::{Args, Data, Image as TesseractImage};

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{DetectedWord, OcrResult};

pub struct TesseractOcrService {
    language: String,
}

impl TesseractOcrService {
    /// Fails when no usable `tesseract` binary is on the PATH.
    pub fn build(language: &str) -> Result<Self> {
        log::info!("[TESSERACT_OCR] Initializing Tesseract OCR service");

        let version = rusty_tesseract::get_tesseract_version()
            .context("Tesseract is not installed or not on PATH")?;
        log::info!(
            "[TESSERACT_OCR] Found tesseract {}, language={}",
            version.lines().next().unwrap_or_default(),
            language
        );

        Ok(Self::with_language(language))
    }

    pub fn with_language(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }

    fn build_args(&self) -> Args {
        Args {
            lang: self.language.clone(),
            ..Args::default()
        }
    }

    fn convert_data_to_words(data: &[Data]) -> Vec<DetectedWord> {
        data.iter()
            .filter(|entry| entry.conf >= 0.0 && !entry.text.trim().is_empty())
            .map(|entry| {
                DetectedWord::new(
                    entry.text.clone(),
                    entry.block_num,
                    entry.par_num,
                    entry.line_num,
                    entry.conf,
                )
            })
            .collect()
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image_path: &Path) -> Result<OcrResult> {
        log::info!("[TESSERACT_OCR] Starting text extraction for {:?}", image_path);

        let path = image_path.to_path_buf();
        let args = self.build_args();

        let data_output = tokio::task::spawn_blocking(move || {
            let tesseract_image = TesseractImage::from_path(path)
                .context("Failed to create Tesseract image")?;
            rusty_tesseract::image_to_data(&tesseract_image, &args)
                .context("Failed to extract text from image")
        })
        .await
        .context("Tesseract worker stopped unexpectedly")??;

        let words = Self::convert_data_to_words(&data_output.data);
        let result = OcrResult::from_words(words);

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} lines, {} characters",
            result.text_blocks.len(),
            result.full_text.len()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", result.full_text);

        Ok(result)
    }
}
