use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::interfaces::adapters::ImageSourceProvider;
use crate::core::interfaces::ports::{PointerLocator, ScreenCapturer};
use crate::core::models::{ImageReference, ImageSourceMode, PointerLocation};
use crate::global_constants::{APPLICATION_DIR_NAME, CAPTURE_FILE_PREFIX, LOG_TAG_CAPTURE};

const CAPTURE_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Desktop stand-in for a camera: snapshots the monitor under the pointer
/// and stores it as a PNG so it can be handled like any picked photo.
///
/// Only the latest capture is kept on disk.
pub struct XcapCameraCapture {
    screen_capturer: Arc<dyn ScreenCapturer>,
    pointer_locator: Arc<dyn PointerLocator>,
    capture_dir: PathBuf,
    settle_delay: Duration,
    last_capture: Mutex<Option<PathBuf>>,
}

impl XcapCameraCapture {
    pub fn initialize(
        screen_capturer: Arc<dyn ScreenCapturer>,
        pointer_locator: Arc<dyn PointerLocator>,
        capture_dir: PathBuf,
    ) -> Self {
        log::debug!(
            "{} storing captures in {:?}",
            LOG_TAG_CAPTURE,
            capture_dir
        );

        let removed = purge_stale_captures(&capture_dir);
        if removed > 0 {
            log::info!(
                "{} removed {} capture(s) left from an earlier session",
                LOG_TAG_CAPTURE,
                removed
            );
        }

        Self {
            screen_capturer,
            pointer_locator,
            capture_dir,
            settle_delay: CAPTURE_SETTLE_DELAY,
            last_capture: Mutex::new(None),
        }
    }

    pub fn default_capture_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APPLICATION_DIR_NAME)
            .join("captures")
    }

    fn next_capture_path(&self) -> PathBuf {
        self.capture_dir
            .join(format!("{}{}.png", CAPTURE_FILE_PREFIX, Uuid::new_v4()))
    }

    fn locate_pointer(&self) -> PointerLocation {
        self.pointer_locator
            .current_location()
            .unwrap_or_else(|e| {
                log::warn!(
                    "{} failed to get pointer location, using origin: {:#}",
                    LOG_TAG_CAPTURE,
                    e
                );
                PointerLocation::origin()
            })
    }

    fn replace_last_capture(&self, saved_path: PathBuf) -> Result<()> {
        let previous = self
            .last_capture
            .lock()
            .map_err(|_| anyhow::anyhow!("Capture lock poisoned"))?
            .replace(saved_path);

        if let Some(previous) = previous {
            match std::fs::remove_file(&previous) {
                Ok(()) => log::debug!("{} removed previous capture {:?}", LOG_TAG_CAPTURE, previous),
                Err(e) => log::warn!(
                    "{} could not remove previous capture {:?}: {}",
                    LOG_TAG_CAPTURE,
                    previous,
                    e
                ),
            }
        }
        Ok(())
    }
}

fn is_capture_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(CAPTURE_FILE_PREFIX) && name.ends_with(".png"))
}

fn purge_stale_captures(capture_dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(capture_dir) else {
        return 0;
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_capture_file(path))
        .filter(|path| std::fs::remove_file(path).is_ok())
        .count()
}

#[async_trait]
impl ImageSourceProvider for XcapCameraCapture {
    async fn pick(&self, _mode: ImageSourceMode) -> Result<Option<ImageReference>> {
        tokio::time::sleep(self.settle_delay).await;

        let location = self.locate_pointer();
        let screen_capturer = Arc::clone(&self.screen_capturer);
        let destination = self.next_capture_path();

        let saved_path = tokio::task::spawn_blocking(move || -> Result<PathBuf> {
            let capture_buffer = screen_capturer.capture_monitor_at(&location)?;
            capture_buffer.write_png(&destination)?;
            Ok(destination)
        })
        .await
        .context("Capture worker stopped unexpectedly")??;

        log::info!("{} saved capture to {:?}", LOG_TAG_CAPTURE, saved_path);
        self.replace_last_capture(saved_path.clone())?;
        Ok(ImageReference::from_path(saved_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CaptureBuffer;

    struct MockScreenCapturer {
        requested_locations: Mutex<Vec<PointerLocation>>,
    }

    impl MockScreenCapturer {
        fn new() -> Self {
            Self {
                requested_locations: Mutex::new(Vec::new()),
            }
        }
    }

    impl ScreenCapturer for MockScreenCapturer {
        fn capture_monitor_at(&self, location: &PointerLocation) -> Result<CaptureBuffer> {
            self.requested_locations.lock().unwrap().push(*location);
            let raw_data = vec![255u8; 8 * 8 * 4];
            Ok(CaptureBuffer::build_from_raw_data(1.0, 8, 8, raw_data))
        }
    }

    struct FailingScreenCapturer;

    impl ScreenCapturer for FailingScreenCapturer {
        fn capture_monitor_at(&self, _location: &PointerLocation) -> Result<CaptureBuffer> {
            anyhow::bail!("no monitor")
        }
    }

    struct FixedPointer(Option<PointerLocation>);

    impl PointerLocator for FixedPointer {
        fn current_location(&self) -> Result<PointerLocation> {
            self.0.ok_or_else(|| anyhow::anyhow!("pointer unavailable"))
        }
    }

    fn temp_capture_dir() -> PathBuf {
        std::env::temp_dir().join(format!("screen-camera-test-{}", Uuid::new_v4()))
    }

    fn capture_without_delay(
        screen_capturer: Arc<dyn ScreenCapturer>,
        pointer: FixedPointer,
        capture_dir: PathBuf,
    ) -> XcapCameraCapture {
        let mut camera = XcapCameraCapture::initialize(screen_capturer, Arc::new(pointer), capture_dir);
        camera.settle_delay = Duration::ZERO;
        camera
    }

    #[tokio::test]
    async fn test_pick_saves_png_for_monitor_under_pointer() {
        let capture_dir = temp_capture_dir();
        let capturer = Arc::new(MockScreenCapturer::new());
        let camera = capture_without_delay(
            capturer.clone(),
            FixedPointer(Some(PointerLocation::at_coordinates(40, 60))),
            capture_dir.clone(),
        );

        let image = camera.pick(ImageSourceMode::Camera).await.unwrap().unwrap();

        assert!(image.path().exists());
        assert!(image.file_name().starts_with("scan-"));
        assert!(image.file_name().ends_with(".png"));
        assert_eq!(
            *capturer.requested_locations.lock().unwrap(),
            vec![PointerLocation::at_coordinates(40, 60)]
        );

        std::fs::remove_dir_all(&capture_dir).ok();
    }

    #[tokio::test]
    async fn test_pick_falls_back_to_origin_without_pointer() {
        let capture_dir = temp_capture_dir();
        let capturer = Arc::new(MockScreenCapturer::new());
        let camera = capture_without_delay(capturer.clone(), FixedPointer(None), capture_dir.clone());

        camera.pick(ImageSourceMode::Camera).await.unwrap();

        assert_eq!(
            *capturer.requested_locations.lock().unwrap(),
            vec![PointerLocation::origin()]
        );

        std::fs::remove_dir_all(&capture_dir).ok();
    }

    #[tokio::test]
    async fn test_pick_reports_capture_failure() {
        let camera = capture_without_delay(
            Arc::new(FailingScreenCapturer),
            FixedPointer(Some(PointerLocation::origin())),
            temp_capture_dir(),
        );

        let result = camera.pick(ImageSourceMode::Camera).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_consecutive_capture_paths_are_unique() {
        let camera = XcapCameraCapture::initialize(
            Arc::new(FailingScreenCapturer),
            Arc::new(FixedPointer(None)),
            temp_capture_dir(),
        );

        assert_ne!(camera.next_capture_path(), camera.next_capture_path());
    }

    fn capture_files_in(capture_dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(capture_dir)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| is_capture_file(path))
            .collect()
    }

    #[tokio::test]
    async fn test_repeated_scans_keep_only_latest_capture() {
        let capture_dir = temp_capture_dir();
        let camera = capture_without_delay(
            Arc::new(MockScreenCapturer::new()),
            FixedPointer(Some(PointerLocation::origin())),
            capture_dir.clone(),
        );

        let first = camera.pick(ImageSourceMode::Camera).await.unwrap().unwrap();
        let second = camera.pick(ImageSourceMode::Camera).await.unwrap().unwrap();

        assert!(!first.path().exists());
        assert!(second.path().exists());
        assert_eq!(capture_files_in(&capture_dir), vec![second.path().to_path_buf()]);

        std::fs::remove_dir_all(&capture_dir).ok();
    }

    #[test]
    fn test_initialize_removes_captures_from_earlier_session() {
        let capture_dir = temp_capture_dir();
        std::fs::create_dir_all(&capture_dir).unwrap();
        let leftover = capture_dir.join("scan-leftover.png");
        let unrelated = capture_dir.join("notes.txt");
        std::fs::write(&leftover, b"png").unwrap();
        std::fs::write(&unrelated, b"keep").unwrap();

        let _camera = XcapCameraCapture::initialize(
            Arc::new(FailingScreenCapturer),
            Arc::new(FixedPointer(None)),
            capture_dir.clone(),
        );

        assert!(!leftover.exists());
        assert!(unrelated.exists());

        std::fs::remove_dir_all(&capture_dir).ok();
    }

    #[test]
    fn test_default_capture_dir_is_app_specific() {
        let capture_dir = XcapCameraCapture::default_capture_dir();

        assert!(capture_dir.ends_with("photo-text-scanner/captures"));
    }
}
