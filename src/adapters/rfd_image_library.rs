use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use rfd::AsyncFileDialog;

use crate::core::interfaces::adapters::ImageSourceProvider;
use crate::core::models::{ImageReference, ImageSourceMode};
use crate::global_constants::{LOG_TAG_LIBRARY, SUPPORTED_IMAGE_EXTENSIONS};

/// Photo library backed by the native file dialog.
pub struct RfdImageLibrary;

impl RfdImageLibrary {
    pub fn initialize() -> Self {
        log::debug!("{} initializing native image picker", LOG_TAG_LIBRARY);
        Self
    }

    fn build_dialog() -> AsyncFileDialog {
        let dialog = AsyncFileDialog::new()
            .set_title("Pick an image")
            .add_filter("Images", SUPPORTED_IMAGE_EXTENSIONS);

        match dirs::picture_dir().or_else(dirs::home_dir) {
            Some(start_dir) => dialog.set_directory(start_dir),
            None => dialog,
        }
    }

    fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| {
                SUPPORTED_IMAGE_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(extension))
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl ImageSourceProvider for RfdImageLibrary {
    async fn pick(&self, _mode: ImageSourceMode) -> Result<Option<ImageReference>> {
        let Some(file_handle) = Self::build_dialog().pick_file().await else {
            log::info!("{} picker cancelled", LOG_TAG_LIBRARY);
            return Ok(None);
        };

        let path = file_handle.path();
        if !Self::is_supported_image(path) {
            log::warn!("{} ignoring unsupported file {:?}", LOG_TAG_LIBRARY, path);
            return Ok(None);
        }

        log::info!("{} picked {:?}", LOG_TAG_LIBRARY, path);
        Ok(ImageReference::from_path(path))
    }
}
