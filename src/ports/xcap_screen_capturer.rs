use anyhow::{Context, Result};

use crate::core::interfaces::ports::ScreenCapturer;
use crate::core::models::{CaptureBuffer, PointerLocation};
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_SCALE_FACTOR, LOG_TAG_CAPTURE,
};

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn find_monitor_at(&self, location: &PointerLocation) -> Result<xcap::Monitor> {
        xcap::Monitor::from_point(location.x_position, location.y_position).with_context(|| {
            format!(
                "failed to find monitor at ({}, {})",
                location.x_position, location.y_position
            )
        })
    }

    fn into_capture_buffer(image: xcap::image::RgbaImage, scale_factor: f64) -> CaptureBuffer {
        let width_pixels = image.width();
        let height_pixels = image.height();

        log::info!(
            "{} captured {}x{} screenshot, scale_factor={}",
            LOG_TAG_CAPTURE,
            width_pixels,
            height_pixels,
            scale_factor
        );

        CaptureBuffer::build_from_raw_data(scale_factor, width_pixels, height_pixels, image.into_raw())
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_monitor_at(&self, location: &PointerLocation) -> Result<CaptureBuffer> {
        log::debug!(
            "{} capturing monitor at ({}, {})",
            LOG_TAG_CAPTURE,
            location.x_position,
            location.y_position
        );

        let monitor = self.find_monitor_at(location)?;
        let scale_factor = monitor
            .scale_factor()
            .with_context(|| ERROR_CONTEXT_SCALE_FACTOR)?;
        let captured_image = monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)?;

        Ok(Self::into_capture_buffer(captured_image, scale_factor as f64))
    }
}
