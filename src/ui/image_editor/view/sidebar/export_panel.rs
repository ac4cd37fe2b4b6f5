// SPDX-License-Identifier: MPL-2.0
//! Export actions: single photo download and the print sheet.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column};
use iced::{Element, Length};

use super::super::super::{Message, SidebarMessage, ViewContext};
use super::{section, SidebarModel};

pub fn panel<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let enabled = !model.busy && !model.cropping;

    let download = button(text(ctx.i18n.tr("editor-export-download")).size(typography::BODY).center())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::primary)
        .on_press_maybe(enabled.then_some(Message::Sidebar(SidebarMessage::Download)));

    let sheet = button(text(ctx.i18n.tr("editor-export-sheet")).size(typography::BODY).center())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::unselected)
        .on_press_maybe(enabled.then_some(Message::Sidebar(SidebarMessage::OpenSheet)));

    section(
        ctx.i18n.tr("editor-section-export"),
        Column::new().spacing(spacing::XS).push(download).push(sheet),
    )
}
