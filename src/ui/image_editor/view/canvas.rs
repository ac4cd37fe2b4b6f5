// SPDX-License-Identifier: MPL-2.0
//! Editing canvas with guide captions and the busy overlay.

use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::image_editor::overlay::{Backdrop, Caption, PhotoCanvas};
use crate::ui::image_editor::render;
use crate::ui::styles;
use iced::widget::{center, container, text, Canvas, Stack};
use iced::{Background, Color, Element, Length};

use super::super::{Message, State, ViewContext};

pub struct CanvasModel<'a> {
    pub canvas: PhotoCanvas<'a, Message>,
    pub busy: bool,
}

impl<'a> CanvasModel<'a> {
    pub fn from_state(state: &'a State, ctx: &ViewContext<'a>) -> Self {
        let layer = state.crop_layer();
        let captions = layer
            .map(|layer| {
                render::labels(&layer)
                    .into_iter()
                    .map(|label| Caption {
                        text: ctx.i18n.tr(label.key),
                        label,
                    })
                    .collect()
            })
            .unwrap_or_default();
        let handle_active = state
            .crop()
            .mode
            .session()
            .is_some_and(|session| session.active_handle.is_some());

        Self {
            canvas: PhotoCanvas {
                backdrop: state.frame().map(Backdrop::Frame),
                captions,
                surface: state.surface(),
                crop: layer.map(|layer| layer.rect),
                dragging: state.is_dragging() || handle_active,
                on_event: Message::Canvas,
            },
            busy: state.is_busy(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let canvas = Canvas::new(model.canvas)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(canvas);

    if model.busy {
        let notice = container(text(ctx.i18n.tr("editor-enhancing")).size(typography::BODY_LG))
            .padding(spacing::MD)
            .style(styles::container::modal);
        stack = stack.push(
            container(center(notice))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(Color {
                        a: opacity::OVERLAY_MEDIUM,
                        ..palette::BLACK
                    })),
                    ..Default::default()
                }),
        );
    }

    container(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas)
        .into()
}
