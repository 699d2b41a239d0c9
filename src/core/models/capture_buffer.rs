use std::path::Path;

use anyhow::{Context, Result};

/// Raw RGBA pixels grabbed from a monitor.
#[derive(Clone)]
pub struct CaptureBuffer {
    pub scale_factor: f64,
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("scale_factor", &self.scale_factor)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl CaptureBuffer {
    pub fn build_from_raw_data(
        scale_factor: f64,
        width_pixels: u32,
        height_pixels: u32,
        raw_rgba_data: Vec<u8>,
    ) -> Self {
        log::debug!(
            "[CAPTURE_BUFFER] building buffer: {}x{}, scale={}",
            width_pixels,
            height_pixels,
            scale_factor
        );

        Self {
            scale_factor,
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn write_png(&self, destination: &Path) -> Result<()> {
        let rgba_image = image::RgbaImage::from_raw(self.width, self.height, self.raw_data.clone())
            .with_context(|| {
                format!(
                    "Capture buffer does not hold {}x{} RGBA pixels",
                    self.width, self.height
                )
            })?;

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        rgba_image
            .save_with_format(destination, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write capture to {:?}", destination))?;

        log::debug!(
            "[CAPTURE_BUFFER] wrote {}x{} png to {:?}",
            self.width,
            self.height,
            destination
        );
        Ok(())
    }
}
