// SPDX-License-Identifier: MPL-2.0
//! Crop tool panel: ratio presets, free rotation and guide toggles.

use crate::config::{MAX_ROTATION_DEGREES, MIN_ROTATION_DEGREES, ROTATION_STEP_DEGREES};
use crate::domain::editing::CropRatio;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, slider, text, Column, Row, Space};
use iced::{Element, Length};

use super::super::super::{Message, SidebarMessage, ViewContext};
use super::{choice, section, SidebarModel};

fn ratio_key(ratio: CropRatio) -> &'static str {
    match ratio {
        CropRatio::IdPhoto => "editor-crop-ratio-id",
        CropRatio::Square => "editor-crop-ratio-square",
    }
}

pub fn panel<'a>(model: &SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle_key = if model.cropping {
        "editor-crop-cancel"
    } else {
        "editor-crop-start"
    };
    let toggle = button(text(ctx.i18n.tr(toggle_key)).size(typography::BODY).center())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(if model.cropping {
            styles::button::selected
        } else {
            styles::button::primary
        })
        .on_press_maybe((!model.busy).then_some(Message::Sidebar(SidebarMessage::ToggleCrop)));

    let mut body = Column::new().spacing(spacing::XS).push(toggle);

    let ratios = CropRatio::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &ratio| {
            row.push(choice(
                ctx.i18n.tr(ratio_key(ratio)),
                ratio == model.ratio,
                (!model.busy).then_some(SidebarMessage::SetCropRatio(ratio)),
            ))
        },
    );
    body = body
        .push(text(ctx.i18n.tr("editor-crop-ratio")).size(typography::BODY_SM))
        .push(ratios);

    if model.cropping {
        let degrees = format!("{:+.1}", model.rotation.value());
        let rotation_header = Row::new()
            .push(text(ctx.i18n.tr("editor-crop-rotation")).size(typography::BODY_SM))
            .push(Space::new().width(Length::Fill))
            .push(
                text(ctx.i18n.tr_with_args("editor-crop-rotation-value", &[("degrees", &degrees)]))
                    .size(typography::BODY_SM),
            );
        let rotation = slider(
            MIN_ROTATION_DEGREES..=MAX_ROTATION_DEGREES,
            model.rotation.value(),
            |v| Message::Sidebar(SidebarMessage::RotationChanged(v)),
        )
        .step(ROTATION_STEP_DEGREES);

        let apply = button(text(ctx.i18n.tr("editor-crop-apply")).size(typography::BODY).center())
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::button::primary)
            .on_press_maybe((!model.busy).then_some(Message::Sidebar(SidebarMessage::ApplyCrop)));

        body = body.push(rotation_header).push(rotation).push(apply);
    }

    let guides = Column::new()
        .spacing(spacing::XXS)
        .push(
            checkbox(model.guides.crop_guides)
                .label(ctx.i18n.tr("editor-guides-crop"))
                .on_toggle(|v| Message::Sidebar(SidebarMessage::ToggleCropGuides(v)))
                .text_size(typography::BODY_SM),
        )
        .push(
            checkbox(model.guides.biometric_guides)
                .label(ctx.i18n.tr("editor-guides-biometric"))
            .on_toggle(|v| Message::Sidebar(SidebarMessage::ToggleBiometricGuides(v)))
            .text_size(typography::BODY_SM),
        );

    section(ctx.i18n.tr("editor-section-crop"), body.push(guides))
}
