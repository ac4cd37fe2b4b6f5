// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar and sidebar background.
pub fn toolbar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::SLATE_800
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Grouped controls inside the sidebar.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette::SLATE_700,
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Canvas area behind the photo.
pub fn canvas(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        ..Default::default()
    }
}

/// Error banner.
pub fn error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ERROR_900)),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: palette::ERROR_500,
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dimmed layer behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Modal dialog surface.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_800)),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: palette::SLATE_700,
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Dashed-looking drop zone on the upload screen.
pub fn drop_zone(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::SLATE_800
        })),
        border: Border {
            radius: radius::LG.into(),
            width: 2.0,
            color: palette::SKY_500,
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
