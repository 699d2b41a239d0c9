use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const PICK_BUTTON_COLOR: Color = Color::from_rgb(0.314, 0.553, 0.306);
pub const SCAN_BUTTON_COLOR: Color = Color::from_rgb(0.129, 0.588, 0.953);
pub const COPY_BUTTON_COLOR: Color = Color::from_rgb(0.141, 0.212, 0.259);
pub const CLEAR_BUTTON_COLOR: Color = Color::from_rgb(0.957, 0.263, 0.212);

const BUTTON_RADIUS: f32 = 10.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.08),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: SCAN_BUTTON_COLOR,
                success: PICK_BUTTON_COLOR,
                danger: CLEAR_BUTTON_COLOR,
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::WHITE,
                text: Color::from_rgb(0.2, 0.2, 0.2),
                primary: SCAN_BUTTON_COLOR,
                success: PICK_BUTTON_COLOR,
                danger: CLEAR_BUTTON_COLOR,
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn shade(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * factor).clamp(0.0, 1.0),
        (color.g * factor).clamp(0.0, 1.0),
        (color.b * factor).clamp(0.0, 1.0),
    )
}

/// Solid rounded button: lighter on hover, darker while pressed.
pub fn filled_button_style(base: Color, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (base, Color::WHITE),
        button::Status::Hovered => (shade(base, 1.15), Color::WHITE),
        button::Status::Pressed => (shade(base, 0.8), Color::WHITE),
        button::Status::Disabled => (Color::from_rgb(0.3, 0.3, 0.3), Color::from_rgb(0.5, 0.5, 0.5)),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn pick_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(PICK_BUTTON_COLOR, status)
}

pub fn scan_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(SCAN_BUTTON_COLOR, status)
}

pub fn copy_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(COPY_BUTTON_COLOR, status)
}

pub fn clear_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(CLEAR_BUTTON_COLOR, status)
}

pub fn text_box_style(mode: ThemeMode) -> container::Style {
    let (background, border_color, text_color) = match mode {
        ThemeMode::Dark => (
            Color::from_rgb(0.16, 0.16, 0.18),
            Color::from_rgb(0.3, 0.3, 0.32),
            Color::from_rgb(0.9, 0.9, 0.9),
        ),
        ThemeMode::Light => (
            Color::from_rgb(0.941, 0.941, 0.941),
            Color::from_rgb(0.102, 0.102, 0.098),
            Color::from_rgb(0.2, 0.2, 0.2),
        ),
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn notice_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.1, 0.1, 0.1, 0.92))),
        text_color: Some(Color::WHITE),
        border: Border {
            color: PICK_BUTTON_COLOR,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
