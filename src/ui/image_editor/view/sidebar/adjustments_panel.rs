// SPDX-License-Identifier: MPL-2.0
//! Brightness, contrast and saturation sliders.

use crate::config::{MAX_FILTER_PERCENT, MIN_FILTER_PERCENT};
use crate::domain::editing::FilterKind;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{slider, text, Column, Row, Space};
use iced::{Element, Length};

use super::super::super::{Message, SidebarMessage, ViewContext};
use super::{section, SidebarModel};

fn filter_row<'a>(
    label: String,
    kind: FilterKind,
    value: f32,
    enabled: bool,
) -> Element<'a, Message> {
    let value_color = if enabled { None } else { Some(palette::SLATE_400) };

    let header = Row::new()
        .push(text(label).size(typography::BODY_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            text(format!("{value:.0}%"))
                .size(typography::BODY_SM)
                .color_maybe(value_color),
        );

    // Iced sliders have no disabled state; routing drops the messages instead.
    let control = slider(MIN_FILTER_PERCENT..=MAX_FILTER_PERCENT, value, move |v| {
        Message::Sidebar(SidebarMessage::FilterChanged(kind, v))
    })
    .on_release(Message::Sidebar(SidebarMessage::FilterReleased))
    .step(1.0);

    Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(control)
        .into()
}

pub fn panel<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let enabled = !model.cropping && !model.busy;
    let body = Column::new()
        .spacing(spacing::XS)
        .push(filter_row(
            ctx.i18n.tr("editor-filter-brightness"),
            FilterKind::Brightness,
            model.filters.brightness.value(),
            enabled,
        ))
        .push(filter_row(
            ctx.i18n.tr("editor-filter-contrast"),
            FilterKind::Contrast,
            model.filters.contrast.value(),
            enabled,
        ))
        .push(filter_row(
            ctx.i18n.tr("editor-filter-saturation"),
            FilterKind::Saturate,
            model.filters.saturate.value(),
            enabled,
        ));

    section(ctx.i18n.tr("editor-section-adjustments"), body)
}
