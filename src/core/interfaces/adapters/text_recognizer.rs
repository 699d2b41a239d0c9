use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImageReference, RecognizedText};

/// `Ok(None)` means the image held no readable text.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &ImageReference) -> Result<Option<RecognizedText>>;
}
