use std::path::PathBuf;
use std::sync::Arc;

use iced::{window, Element, Task, Theme};

use crate::core::interfaces::adapters::{ImageSourceProvider, TextRecognizer};
use crate::core::interfaces::ports::ClipboardSink;
use crate::core::models::{ImageReference, ImageSourceMode, UserSettings};
use crate::core::orchestrators::recognition_flow::{self, RecognitionFlow, RecognitionOutcome};
use crate::global_constants::NOTICE_DISMISS_DELAY_MS;
use crate::presentation::{app_theme, Notice, ScannerMessage, ScannerView};

pub struct AppOrchestrator {
    image_source: Arc<dyn ImageSourceProvider>,
    text_recognizer: Arc<dyn TextRecognizer>,
    clipboard: Arc<dyn ClipboardSink>,
    flow: RecognitionFlow,
    settings: UserSettings,
    notice: Option<Notice>,
    notice_serial: u64,
    settings_path: Option<PathBuf>,
    hidden_for_capture: bool,
}

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    Scanner(ScannerMessage),
    ImageAcquired(ImageSourceMode, Option<ImageReference>),
    RecognitionFinished(RecognitionOutcome),
    DismissNotice(u64),
}

impl AppOrchestrator {
    pub fn build(
        image_source: Arc<dyn ImageSourceProvider>,
        text_recognizer: Arc<dyn TextRecognizer>,
        clipboard: Arc<dyn ClipboardSink>,
        settings: UserSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            image_source,
            text_recognizer,
            clipboard,
            flow: RecognitionFlow::build(settings.clear_text_on_new_image),
            settings,
            notice: None,
            notice_serial: 0,
            settings_path,
            hidden_for_capture: false,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            OrchestratorMessage::Scanner(ScannerMessage::PickImage) => {
                self.handle_request_image(ImageSourceMode::Library)
            }
            OrchestratorMessage::Scanner(ScannerMessage::CaptureImage) => {
                self.handle_request_image(ImageSourceMode::Camera)
            }
            OrchestratorMessage::Scanner(ScannerMessage::CopyText) => self.handle_copy_text(),
            OrchestratorMessage::Scanner(ScannerMessage::ClearContent) => self.handle_clear(),
            OrchestratorMessage::Scanner(ScannerMessage::ToggleTheme) => self.handle_toggle_theme(),
            OrchestratorMessage::ImageAcquired(mode, image) => {
                self.handle_image_acquired(mode, image)
            }
            OrchestratorMessage::RecognitionFinished(outcome) => {
                self.flow.apply_outcome(outcome);
                Task::none()
            }
            OrchestratorMessage::DismissNotice(serial) => {
                if serial == self.notice_serial {
                    self.notice = None;
                }
                Task::none()
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        ScannerView::new(&self.flow, self.notice.as_ref(), self.settings.theme_mode)
            .render_ui()
            .map(OrchestratorMessage::Scanner)
    }

    pub fn current_theme(&self) -> Theme {
        app_theme::get_theme(&self.settings.theme_mode)
    }

    fn handle_request_image(&mut self, mode: ImageSourceMode) -> Task<OrchestratorMessage> {
        log::info!("[ORCHESTRATOR] Requesting image from {}", mode);

        let image_source = Arc::clone(&self.image_source);
        let acquire = Task::future(async move {
            let image = recognition_flow::acquire_image(image_source, mode).await;
            OrchestratorMessage::ImageAcquired(mode, image)
        });

        if mode != ImageSourceMode::Camera {
            return acquire;
        }

        // This window must not be on screen when the monitor under the pointer is captured.
        log::debug!("[ORCHESTRATOR] Minimizing main window before capture");
        self.hidden_for_capture = true;
        Task::batch(vec![
            window::oldest().and_then(|id| window::minimize(id, true)),
            acquire,
        ])
    }

    fn restore_window_after_capture(&mut self) -> Task<OrchestratorMessage> {
        if !self.hidden_for_capture {
            return Task::none();
        }

        log::debug!("[ORCHESTRATOR] Restoring main window after capture");
        self.hidden_for_capture = false;
        window::oldest().and_then(|id| window::minimize(id, false))
    }

    fn handle_image_acquired(
        &mut self,
        mode: ImageSourceMode,
        image: Option<ImageReference>,
    ) -> Task<OrchestratorMessage> {
        let restore = self.restore_window_after_capture();

        let Some(request) = self.flow.accept_image(mode, image) else {
            return restore;
        };

        let text_recognizer = Arc::clone(&self.text_recognizer);
        Task::batch(vec![
            restore,
            Task::future(async move {
                let outcome = recognition_flow::recognize(text_recognizer, request).await;
                OrchestratorMessage::RecognitionFinished(outcome)
            }),
        ])
    }

    fn handle_copy_text(&mut self) -> Task<OrchestratorMessage> {
        if !self.flow.copy_to_clipboard(self.clipboard.as_ref()) {
            return Task::none();
        }

        self.notice_serial += 1;
        self.notice = Some(Notice::copy_confirmation());

        let serial = self.notice_serial;
        Task::future(async move {
            tokio::time::sleep(std::time::Duration::from_millis(NOTICE_DISMISS_DELAY_MS)).await;
            OrchestratorMessage::DismissNotice(serial)
        })
    }

    fn handle_clear(&mut self) -> Task<OrchestratorMessage> {
        self.flow.clear();
        self.notice = None;
        Task::none()
    }

    fn handle_toggle_theme(&mut self) -> Task<OrchestratorMessage> {
        self.settings.theme_mode = self.settings.theme_mode.toggled();
        log::info!(
            "[ORCHESTRATOR] Switched theme to {}",
            self.settings.theme_mode
        );

        if let Some(settings_path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(settings_path) {
                log::error!("[ORCHESTRATOR] Failed to save theme setting: {:#}", e);
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{RecognizedText, ThemeMode};
    use crate::core::orchestrators::recognition_flow::FlowPhase;
    use std::sync::Mutex;

    struct MockImageSource;
    #[async_trait::async_trait]
    impl ImageSourceProvider for MockImageSource {
        async fn pick(&self, _mode: ImageSourceMode) -> anyhow::Result<Option<ImageReference>> {
            Ok(ImageReference::from_path("photo.png"))
        }
    }

    struct MockRecognizer;
    #[async_trait::async_trait]
    impl TextRecognizer for MockRecognizer {
        async fn recognize(&self, _image: &ImageReference) -> anyhow::Result<Option<RecognizedText>> {
            Ok(RecognizedText::from_raw("Hello World"))
        }
    }

    #[derive(Default)]
    struct MockClipboard {
        writes: Mutex<Vec<String>>,
    }
    impl ClipboardSink for MockClipboard {
        fn write(&self, content: &str) -> anyhow::Result<()> {
            self.writes.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    fn create_test_orchestrator(clipboard: Arc<MockClipboard>) -> AppOrchestrator {
        AppOrchestrator::build(
            Arc::new(MockImageSource),
            Arc::new(MockRecognizer),
            clipboard,
            UserSettings::default(),
            None,
        )
    }

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("orchestrator-settings-test-{}", uuid::Uuid::new_v4()))
            .join("settings.json")
    }

    fn outcome_for(orchestrator: &AppOrchestrator, text: &str) -> RecognitionOutcome {
        RecognitionOutcome {
            generation: 1,
            image: orchestrator.flow.image().cloned().unwrap(),
            text: RecognizedText::from_raw(text),
        }
    }

    #[test]
    fn test_build_creates_orchestrator_with_empty_flow() {
        let orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        assert_eq!(orchestrator.flow.phase(), FlowPhase::Empty);
        assert!(orchestrator.notice.is_none());
    }

    #[test]
    fn test_image_acquired_starts_recognition() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Library,
            ImageReference::from_path("photo.png"),
        ));

        assert_eq!(orchestrator.flow.phase(), FlowPhase::Recognizing);
    }

    #[test]
    fn test_cancelled_acquisition_keeps_placeholder() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Library,
            None,
        ));

        assert_eq!(orchestrator.flow.phase(), FlowPhase::Empty);
        assert_eq!(orchestrator.flow.display_text(), "No text recognized yet.");
    }

    #[test]
    fn test_recognition_finished_shows_text() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));
        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Camera,
            ImageReference::from_path("photo.png"),
        ));

        let outcome = outcome_for(&orchestrator, "Hello World");
        let _ = orchestrator.update(OrchestratorMessage::RecognitionFinished(outcome));

        assert_eq!(orchestrator.flow.display_text(), "Hello World");
        assert!(orchestrator.flow.can_copy());
    }

    #[test]
    fn test_copy_text_writes_clipboard_and_shows_notice() {
        let clipboard = Arc::new(MockClipboard::default());
        let mut orchestrator = create_test_orchestrator(clipboard.clone());
        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Library,
            ImageReference::from_path("photo.png"),
        ));
        let outcome = outcome_for(&orchestrator, "Hello World");
        let _ = orchestrator.update(OrchestratorMessage::RecognitionFinished(outcome));

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::CopyText));

        assert_eq!(
            *clipboard.writes.lock().unwrap(),
            vec!["Hello World".to_string()]
        );
        assert_eq!(orchestrator.notice, Some(Notice::copy_confirmation()));
    }

    #[test]
    fn test_copy_without_text_shows_no_notice() {
        let clipboard = Arc::new(MockClipboard::default());
        let mut orchestrator = create_test_orchestrator(clipboard.clone());

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::CopyText));

        assert!(clipboard.writes.lock().unwrap().is_empty());
        assert!(orchestrator.notice.is_none());
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));
        orchestrator.notice = Some(Notice::copy_confirmation());
        orchestrator.notice_serial = 2;

        let _ = orchestrator.update(OrchestratorMessage::DismissNotice(1));
        assert!(orchestrator.notice.is_some());

        let _ = orchestrator.update(OrchestratorMessage::DismissNotice(2));
        assert!(orchestrator.notice.is_none());
    }

    #[test]
    fn test_clear_resets_flow_and_notice() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));
        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Library,
            ImageReference::from_path("photo.png"),
        ));
        let outcome = outcome_for(&orchestrator, "Hello");
        let _ = orchestrator.update(OrchestratorMessage::RecognitionFinished(outcome));
        orchestrator.notice = Some(Notice::copy_confirmation());

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::ClearContent));

        assert_eq!(orchestrator.flow.phase(), FlowPhase::Empty);
        assert_eq!(orchestrator.flow.display_text(), "No text recognized yet.");
        assert!(orchestrator.notice.is_none());
    }

    #[test]
    fn test_toggle_theme_switches_mode() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::ToggleTheme));

        assert_eq!(orchestrator.settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_toggle_theme_writes_settings_file() {
        let settings_path = temp_settings_path();
        let mut orchestrator = AppOrchestrator::build(
            Arc::new(MockImageSource),
            Arc::new(MockRecognizer),
            Arc::new(MockClipboard::default()),
            UserSettings::default(),
            Some(settings_path.clone()),
        );

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::ToggleTheme));

        let contents = std::fs::read_to_string(&settings_path).unwrap();
        assert!(contents.contains("\"Light\""));
        let reloaded = UserSettings::load_from(&settings_path).unwrap();
        assert_eq!(reloaded.theme_mode, ThemeMode::Light);

        if let Some(parent) = settings_path.parent() {
            std::fs::remove_dir_all(parent).ok();
        }
    }

    #[test]
    fn test_capture_request_hides_window_until_image_arrives() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::CaptureImage));
        assert!(orchestrator.hidden_for_capture);

        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(
            ImageSourceMode::Camera,
            ImageReference::from_path("scan-1.png"),
        ));
        assert!(!orchestrator.hidden_for_capture);
        assert_eq!(orchestrator.flow.phase(), FlowPhase::Recognizing);
    }

    #[test]
    fn test_failed_capture_still_restores_window() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::CaptureImage));
        let _ = orchestrator.update(OrchestratorMessage::ImageAcquired(ImageSourceMode::Camera, None));

        assert!(!orchestrator.hidden_for_capture);
        assert_eq!(orchestrator.flow.phase(), FlowPhase::Empty);
    }

    #[test]
    fn test_library_request_keeps_window_visible() {
        let mut orchestrator = create_test_orchestrator(Arc::new(MockClipboard::default()));

        let _ = orchestrator.update(OrchestratorMessage::Scanner(ScannerMessage::PickImage));

        assert!(!orchestrator.hidden_for_capture);
    }
}
