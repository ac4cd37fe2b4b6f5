// SPDX-License-Identifier: MPL-2.0
//! Upload screen: pick or drop a portrait to start editing.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::image_editor::ErrorMessage;
use crate::ui::styles;
use iced::widget::{button, center, container, text, Column};
use iced::{Alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    Browse,
}

/// Why the last attempt failed, and whether a load is running.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub error: Option<ErrorMessage>,
    pub loading: bool,
}

impl State {
    pub fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn fail(&mut self, error: ErrorMessage) {
        self.loading = false;
        self.error = Some(error);
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let browse_label = if state.loading {
        "upload-loading"
    } else {
        "upload-browse"
    };
    let browse = button(text(i18n.tr(browse_label)).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press_maybe((!state.loading).then_some(Message::Browse));

    let mut panel = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(text(i18n.tr("upload-title")).size(typography::TITLE_MD))
        .push(
            text(i18n.tr("upload-hint"))
                .size(typography::BODY)
                .color(palette::SLATE_400),
        )
        .push(browse)
        .push(
            text(i18n.tr("upload-formats"))
                .size(typography::CAPTION)
                .color(palette::SLATE_400),
        );

    if let Some(error) = &state.error {
        let mut lines = Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr(error.key)).size(typography::BODY));
        if !error.detail.is_empty() {
            lines = lines.push(text(error.detail.as_str()).size(typography::CAPTION));
        }
        panel = panel.push(
            container(lines)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(styles::container::error),
        );
    }

    let drop_zone = container(panel)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::UPLOAD_PANEL_WIDTH))
        .style(styles::container::drop_zone);

    container(center(drop_zone))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn loading_clears_previous_error() {
        let mut state = State::default();
        state.fail(ErrorMessage::from(&Error::UnsupportedFormat("gif".into())));
        assert!(state.error.is_some());

        state.start_loading();
        assert!(state.loading);
        assert!(state.error.is_none());
    }
}
