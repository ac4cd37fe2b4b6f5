// SPDX-License-Identifier: MPL-2.0
//! Top toolbar: zoom, history and image actions.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row, Space};
use iced::{Alignment, Element, Length};

use super::super::{Message, State, ToolbarMessage, ViewContext};

pub struct ToolbarModel {
    pub zoom_percent: f32,
    pub viewport_enabled: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_reset: bool,
    pub can_change_image: bool,
}

impl ToolbarModel {
    pub fn from_state(state: &State) -> Self {
        let busy = state.is_busy();
        let cropping = state.is_cropping();
        Self {
            zoom_percent: state.viewport().zoom().as_percent(),
            viewport_enabled: !busy && !cropping,
            can_undo: !busy && state.can_undo(),
            can_redo: !busy && state.can_redo(),
            can_reset: !busy && !cropping,
            can_change_image: !busy,
        }
    }
}

fn action<'a>(label: String, message: ToolbarMessage, enabled: bool) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::unselected)
        .on_press_maybe(enabled.then_some(Message::Toolbar(message)))
        .into()
}

pub fn view<'a>(model: &ToolbarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let percent = format!("{:.0}", model.zoom_percent);
    let zoom_label = text(ctx.i18n.tr_with_args("editor-zoom-label", &[("percent", &percent)]))
        .size(typography::BODY_SM);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(action(
            ctx.i18n.tr("editor-zoom-out"),
            ToolbarMessage::ZoomOut,
            model.viewport_enabled,
        ))
        .push(zoom_label)
        .push(action(
            ctx.i18n.tr("editor-zoom-in"),
            ToolbarMessage::ZoomIn,
            model.viewport_enabled,
        ))
        .push(action(
            ctx.i18n.tr("editor-zoom-fit"),
            ToolbarMessage::Fit,
            model.viewport_enabled,
        ))
        .push(Space::new().width(spacing::MD))
        .push(action(
            ctx.i18n.tr("editor-undo"),
            ToolbarMessage::Undo,
            model.can_undo,
        ))
        .push(action(
            ctx.i18n.tr("editor-redo"),
            ToolbarMessage::Redo,
            model.can_redo,
        ))
        .push(action(
            ctx.i18n.tr("editor-reset"),
            ToolbarMessage::Reset,
            model.can_reset,
        ))
        .push(Space::new().width(Length::Fill))
        .push(action(
            ctx.i18n.tr("editor-change-image"),
            ToolbarMessage::ChangeImage,
            model.can_change_image,
        ))
        .padding(spacing::XS);

    container(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}
