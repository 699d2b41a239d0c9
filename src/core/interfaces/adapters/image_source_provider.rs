use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{ImageReference, ImageSourceMode};

/// `Ok(None)` means the user cancelled.
#[async_trait]
pub trait ImageSourceProvider: Send + Sync {
    async fn pick(&self, mode: ImageSourceMode) -> Result<Option<ImageReference>>;
}
