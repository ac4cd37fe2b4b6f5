// SPDX-License-Identifier: MPL-2.0
//! Dismissible error banner above the canvas.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_editor::ErrorMessage;
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::super::{Message, ViewContext};

pub fn view<'a>(error: &'a ErrorMessage, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut lines = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(ctx.i18n.tr(error.key)).size(typography::BODY));
    if !error.detail.is_empty() {
        lines = lines.push(text(error.detail.as_str()).size(typography::CAPTION));
    }

    let dismiss = button(text(ctx.i18n.tr("error-dismiss")).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::dismiss)
        .on_press(Message::DismissError);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(lines)
            .push(dismiss),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::error)
    .into()
}
