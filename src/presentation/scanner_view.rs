use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length, Theme};

use crate::core::models::ThemeMode;
use crate::core::orchestrators::recognition_flow::{FlowPhase, RecognitionFlow};
use crate::global_constants::{
    APPLICATION_TITLE, BUTTON_CLEAR, BUTTON_COPY_TEXT, BUTTON_PICK_IMAGE, BUTTON_SCAN_IMAGE,
    COPY_CONFIRMATION_BODY, COPY_CONFIRMATION_TITLE, RECOGNIZING_HINT, STALE_TEXT_HINT,
};
use crate::presentation::app_theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannerMessage {
    PickImage,
    CaptureImage,
    CopyText,
    ClearContent,
    ToggleTheme,
}

/// Short-lived confirmation shown under the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub body: &'static str,
}

impl Notice {
    pub fn copy_confirmation() -> Self {
        Self {
            title: COPY_CONFIRMATION_TITLE,
            body: COPY_CONFIRMATION_BODY,
        }
    }
}

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

pub struct ScannerView<'a> {
    flow: &'a RecognitionFlow,
    notice: Option<&'a Notice>,
    theme_mode: ThemeMode,
}

impl<'a> ScannerView<'a> {
    pub fn new(flow: &'a RecognitionFlow, notice: Option<&'a Notice>, theme_mode: ThemeMode) -> Self {
        Self {
            flow,
            notice,
            theme_mode,
        }
    }

    /// Copy and clear only make sense once there is text.
    pub fn shows_text_actions(&self) -> bool {
        self.flow.can_copy()
    }

    pub fn status_hint(&self) -> Option<&'static str> {
        if self.flow.phase() == FlowPhase::Recognizing {
            return Some(RECOGNIZING_HINT);
        }
        if self.flow.is_text_stale() {
            return Some(STALE_TEXT_HINT);
        }
        None
    }

    pub fn render_ui(&self) -> Element<'a, ScannerMessage> {
        let flow = self.flow;
        let theme_mode = self.theme_mode;

        let toggle_label = match theme_mode {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };
        let header = row![
            text(APPLICATION_TITLE).size(30),
            Space::new().width(Length::Fill),
            button(text(toggle_label).size(12))
                .padding([6, 12])
                .style(app_theme::copy_button_style)
                .on_press(ScannerMessage::ToggleTheme),
        ]
        .align_y(Alignment::Center)
        .width(Length::Fill);

        let mut text_column = column![].spacing(8).width(Length::Fill);
        if let Some(hint) = self.status_hint() {
            text_column = text_column.push(text(hint).size(13).style(|_theme: &Theme| {
                iced::widget::text::Style {
                    color: Some(Color::from_rgba(0.5, 0.5, 0.5, 1.0)),
                }
            }));
        }
        text_column = text_column.push(text(flow.display_text()).size(18));

        let text_box = container(scrollable(text_column).height(Length::Fill))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fixed(200.0))
            .style(move |_theme| app_theme::text_box_style(theme_mode));

        let source_buttons = row![
            action_button(BUTTON_PICK_IMAGE, ScannerMessage::PickImage, app_theme::pick_button_style),
            action_button(BUTTON_SCAN_IMAGE, ScannerMessage::CaptureImage, app_theme::scan_button_style),
        ]
        .spacing(10);

        let mut content = column![header].spacing(20).padding(24).align_x(Alignment::Center);

        if let Some(reference) = flow.image() {
            content = content.push(
                column![
                    image(image::Handle::from_path(reference.path().to_path_buf()))
                        .width(Length::Fill)
                        .height(Length::Fixed(220.0)),
                    text(reference.file_name()).size(12),
                ]
                .spacing(6)
                .align_x(Alignment::Center),
            );
        }

        content = content.push(text_box).push(source_buttons);

        if self.shows_text_actions() {
            content = content.push(
                row![
                    action_button(BUTTON_COPY_TEXT, ScannerMessage::CopyText, app_theme::copy_button_style),
                    action_button(BUTTON_CLEAR, ScannerMessage::ClearContent, app_theme::clear_button_style),
                ]
                .spacing(10),
            );
        }

        if let Some(notice) = self.notice {
            content = content.push(
                container(column![text(notice.title).size(16), text(notice.body).size(14)].spacing(4))
                    .padding(12)
                    .width(Length::Fill)
                    .style(app_theme::notice_style),
            );
        }

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn action_button<'a>(
    label: &'static str,
    message: ScannerMessage,
    style: ButtonStyle,
) -> Element<'a, ScannerMessage> {
    button(container(text(label).size(16)).center_x(Length::Fill))
        .width(Length::Fixed(150.0))
        .padding([10, 30])
        .style(style)
        .on_press(message)
        .into()
}
