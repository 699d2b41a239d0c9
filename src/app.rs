use std::sync::Arc;

use iced::{Element, Task, Theme};

use crate::adapters::{
    DesktopImageSource, OcrTextRecognizer, RfdImageLibrary, XcapCameraCapture,
    TesseractOcrService,
};
use crate::core::models::UserSettings;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::global_constants::LOG_TAG_APP;
use crate::ports::{ArboardClipboard, SystemPointerLocator, XcapScreenCapturer};

pub struct ScannerApp {
    orchestrator: AppOrchestrator,
}

impl ScannerApp {
    pub fn build() -> (Self, Task<OrchestratorMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings_path = UserSettings::settings_file_path()
            .inspect_err(|e| {
                log::warn!("{} Settings will not be saved: {:#}", LOG_TAG_APP, e)
            })
            .ok();
        let settings = match settings_path.as_deref().map(UserSettings::load_from) {
            Some(Ok(settings)) => settings,
            Some(Err(e)) => {
                log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
                UserSettings::default()
            }
            None => UserSettings::default(),
        };

        let ocr_service = match TesseractOcrService::build(&settings.ocr_language) {
            Ok(service) => {
                log::info!("{} Tesseract OCR service initialized successfully", LOG_TAG_APP);
                service
            }
            Err(e) => {
                log::error!(
                    "{} Tesseract OCR unavailable, recognition will find no text: {:#}",
                    LOG_TAG_APP,
                    e
                );
                TesseractOcrService::with_language(&settings.ocr_language)
            }
        };

        let camera = XcapCameraCapture::initialize(
            Arc::new(XcapScreenCapturer::initialize()),
            Arc::new(SystemPointerLocator::initialize()),
            XcapCameraCapture::default_capture_dir(),
        );
        let image_source = DesktopImageSource::new(
            Arc::new(RfdImageLibrary::initialize()),
            Arc::new(camera),
        );

        let orchestrator = AppOrchestrator::build(
            Arc::new(image_source),
            Arc::new(OcrTextRecognizer::new(Arc::new(ocr_service))),
            Arc::new(ArboardClipboard::initialize()),
            settings,
            settings_path,
        );

        (Self { orchestrator }, Task::none())
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }

    pub fn current_theme(&self) -> Theme {
        self.orchestrator.current_theme()
    }
}
