// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(fill: Color, hover: Color, edge: Color, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => hover,
        button::Status::Disabled => palette::SLATE_700,
        button::Status::Active | button::Status::Pressed => fill,
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        palette::SLATE_400
    } else {
        WHITE
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Primary action (apply, download).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::SKY_500, palette::SKY_400, palette::SKY_600, status)
}

/// The AI retouch trigger.
pub fn ai(_theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::VIOLET_600,
        palette::VIOLET_500,
        palette::VIOLET_600,
        status,
    )
}

/// Selected entry in a toggle group (ratio, intensity, copies).
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    primary(theme, status)
}

/// Unselected entry in a toggle group and secondary actions.
pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let style = filled(
        palette::SLATE_800,
        palette::SLATE_700,
        palette::SLATE_700,
        status,
    );
    if matches!(status, button::Status::Disabled) {
        button::Style {
            background: Some(Background::Color(palette::SLATE_800)),
            ..style
        }
    } else {
        style
    }
}

/// Borderless button drawn over the error panel.
pub fn dismiss(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = if matches!(status, button::Status::Hovered) {
        1.0
    } else {
        0.8
    };
    button::Style {
        background: None,
        text_color: Color { a: alpha, ..WHITE },
        ..button::Style::default()
    }
}
