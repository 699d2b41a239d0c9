use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::OcrResult;

#[async_trait]
pub trait OcrService: Send + Sync {
    async fn extract_text_from_image(&self, image_path: &Path) -> Result<OcrResult>;
}
