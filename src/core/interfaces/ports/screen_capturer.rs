use anyhow::Result;

use crate::core::models::{CaptureBuffer, PointerLocation};

pub trait ScreenCapturer: Send + Sync {
    fn capture_monitor_at(&self, location: &PointerLocation) -> Result<CaptureBuffer>;
}
