use std::sync::Arc;

use crate::core::interfaces::adapters::{ImageSourceProvider, TextRecognizer};
use crate::core::interfaces::ports::ClipboardSink;
use crate::core::models::{ImageReference, ImageSourceMode, RecognizedText};
use crate::global_constants::{LOG_TAG_FLOW, PLACEHOLDER_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPhase {
    Empty,
    ImageOnly,
    Recognizing,
    ImageAndText,
}

/// Ticket for one recognition run. `generation` identifies the image
/// selection it was issued for.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionRequest {
    pub generation: u64,
    pub image: ImageReference,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionOutcome {
    pub generation: u64,
    pub image: ImageReference,
    pub text: Option<RecognizedText>,
}

/// The pick / recognize / review workflow.
///
/// Every accepted image and every `clear` bumps `generation`; a recognition
/// outcome is applied only while its generation is still current, so a slow
/// run can never overwrite text belonging to a newer image.
#[derive(Debug)]
pub struct RecognitionFlow {
    image: Option<ImageReference>,
    text: Option<RecognizedText>,
    generation: u64,
    text_generation: u64,
    pending_generation: Option<u64>,
    clear_text_on_new_image: bool,
}

impl RecognitionFlow {
    pub fn build(clear_text_on_new_image: bool) -> Self {
        Self {
            image: None,
            text: None,
            generation: 0,
            text_generation: 0,
            pending_generation: None,
            clear_text_on_new_image,
        }
    }

    pub fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    #[cfg(test)]
    pub fn text(&self) -> Option<&RecognizedText> {
        self.text.as_ref()
    }

    pub fn display_text(&self) -> &str {
        self.text
            .as_ref()
            .map(RecognizedText::as_str)
            .unwrap_or(PLACEHOLDER_TEXT)
    }

    /// Text is shown but was recognized from an earlier image.
    pub fn is_text_stale(&self) -> bool {
        self.text.is_some() && self.text_generation != self.generation
    }

    pub fn can_copy(&self) -> bool {
        self.text.is_some()
    }

    pub fn phase(&self) -> FlowPhase {
        if self.image.is_none() {
            return FlowPhase::Empty;
        }
        if self.pending_generation == Some(self.generation) {
            return FlowPhase::Recognizing;
        }
        if self.text.is_some() {
            FlowPhase::ImageAndText
        } else {
            FlowPhase::ImageOnly
        }
    }

    #[cfg(test)]
    pub fn set_clear_text_on_new_image(&mut self, enabled: bool) {
        self.clear_text_on_new_image = enabled;
    }

    /// Applies the provider's answer. Returns the recognition to run when the
    /// image actually changed.
    pub fn accept_image(
        &mut self,
        mode: ImageSourceMode,
        image: Option<ImageReference>,
    ) -> Option<RecognitionRequest> {
        let Some(image) = image else {
            log::info!(
                "{} {} returned no image, keeping current state",
                LOG_TAG_FLOW,
                mode
            );
            return None;
        };

        if self.image.as_ref() == Some(&image) {
            log::debug!(
                "{} {} returned the current image {}, nothing to recognize",
                LOG_TAG_FLOW,
                mode,
                image
            );
            return None;
        }

        self.generation += 1;
        self.pending_generation = Some(self.generation);
        if self.clear_text_on_new_image {
            self.text = None;
        }

        log::info!(
            "{} accepted image {} from {} (generation {})",
            LOG_TAG_FLOW,
            image,
            mode,
            self.generation
        );

        self.image = Some(image.clone());
        Some(RecognitionRequest {
            generation: self.generation,
            image,
        })
    }

    /// Returns true when the outcome changed the displayed text.
    pub fn apply_outcome(&mut self, outcome: RecognitionOutcome) -> bool {
        if outcome.generation != self.generation {
            log::warn!(
                "{} discarding recognition for {} (generation {}, current {})",
                LOG_TAG_FLOW,
                outcome.image,
                outcome.generation,
                self.generation
            );
            return false;
        }

        self.pending_generation = None;

        match outcome.text {
            Some(text) => {
                log::info!(
                    "{} recognized {} characters from {}",
                    LOG_TAG_FLOW,
                    text.char_count(),
                    outcome.image
                );
                self.text = Some(text);
                self.text_generation = outcome.generation;
                true
            }
            None => {
                log::info!(
                    "{} no text recognized from {}, keeping current text",
                    LOG_TAG_FLOW,
                    outcome.image
                );
                false
            }
        }
    }

    /// Returns true when the text reached the clipboard and the user should
    /// see a confirmation.
    pub fn copy_to_clipboard(&self, clipboard: &dyn ClipboardSink) -> bool {
        let Some(text) = self.text.as_ref() else {
            log::debug!("{} nothing to copy", LOG_TAG_FLOW);
            return false;
        };

        match clipboard.write(text.as_str()) {
            Ok(()) => {
                log::info!(
                    "{} copied {} characters to clipboard",
                    LOG_TAG_FLOW,
                    text.char_count()
                );
                true
            }
            Err(e) => {
                log::error!("{} failed to copy to clipboard: {:#}", LOG_TAG_FLOW, e);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        log::info!("{} clearing image and text", LOG_TAG_FLOW);
        self.image = None;
        self.text = None;
        self.generation += 1;
        self.text_generation = self.generation;
        self.pending_generation = None;
    }
}

/// Asks the provider for an image; failures count as "no image".
pub async fn acquire_image(
    provider: Arc<dyn ImageSourceProvider>,
    mode: ImageSourceMode,
) -> Option<ImageReference> {
    log::debug!("{} requesting image from {}", LOG_TAG_FLOW, mode);

    match provider.pick(mode).await {
        Ok(image) => image,
        Err(e) => {
            log::warn!("{} {} provider failed: {:#}", LOG_TAG_FLOW, mode, e);
            None
        }
    }
}

/// Runs the recognizer for a request; failures count as "no text".
pub async fn recognize(
    recognizer: Arc<dyn TextRecognizer>,
    request: RecognitionRequest,
) -> RecognitionOutcome {
    log::debug!(
        "{} recognizing {} (generation {})",
        LOG_TAG_FLOW,
        request.image,
        request.generation
    );

    let text = match recognizer.recognize(&request.image).await {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "{} recognition failed for {}: {:#}",
                LOG_TAG_FLOW,
                request.image,
                e
            );
            None
        }
    };

    RecognitionOutcome {
        generation: request.generation,
        image: request.image,
        text,
    }
}
