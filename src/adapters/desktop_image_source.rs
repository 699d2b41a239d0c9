use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImageSourceProvider;
use crate::core::models::{ImageReference, ImageSourceMode};

/// Routes each request to the library picker or the camera.
pub struct DesktopImageSource {
    library: Arc<dyn ImageSourceProvider>,
    camera: Arc<dyn ImageSourceProvider>,
}

impl DesktopImageSource {
    pub fn new(library: Arc<dyn ImageSourceProvider>, camera: Arc<dyn ImageSourceProvider>) -> Self {
        Self { library, camera }
    }
}

#[async_trait]
impl ImageSourceProvider for DesktopImageSource {
    async fn pick(&self, mode: ImageSourceMode) -> Result<Option<ImageReference>> {
        match mode {
            ImageSourceMode::Library => self.library.pick(mode).await,
            ImageSourceMode::Camera => self.camera.pick(mode).await,
        }
    }
}
