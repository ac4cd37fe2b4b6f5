// SPDX-License-Identifier: MPL-2.0
//! AI retouch panel.

use crate::application::port::AiIntensity;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};

use super::super::super::{Message, SidebarMessage, ViewContext};
use super::{choice, section, SidebarModel};

fn intensity_key(intensity: AiIntensity) -> &'static str {
    match intensity {
        AiIntensity::Light => "editor-ai-intensity-light",
        AiIntensity::Medium => "editor-ai-intensity-medium",
        AiIntensity::Strong => "editor-ai-intensity-strong",
    }
}

pub fn panel<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let idle = !model.busy;

    let intensities = AiIntensity::ALL.iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, &intensity| {
            row.push(choice(
                ctx.i18n.tr(intensity_key(intensity)),
                intensity == model.intensity,
                idle.then_some(SidebarMessage::SetIntensity(intensity)),
            ))
        },
    );

    let label = if model.busy {
        "editor-enhancing"
    } else {
        "editor-ai-enhance"
    };
    let enhance = button(text(ctx.i18n.tr(label)).size(typography::BODY).center())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::ai)
        .on_press_maybe(
            (idle && !model.cropping).then_some(Message::Sidebar(SidebarMessage::Enhance)),
        );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("editor-ai-intensity")).size(typography::BODY_SM))
        .push(intensities)
        .push(enhance)
        .push(text(ctx.i18n.tr("editor-ai-hint")).size(typography::CAPTION));

    section(ctx.i18n.tr("editor-section-ai"), body)
}
