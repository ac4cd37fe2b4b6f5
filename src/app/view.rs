// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen and stacks the toast overlay on top of it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::image_editor::{self, State as ImageEditorState};
use crate::ui::notifications::{self, Toast};
use crate::ui::upload;
use iced::widget::{container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub upload: &'a upload::State,
    pub editor: Option<&'a ImageEditorState>,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current: Element<'_, Message> = match (ctx.screen, ctx.editor) {
        (Screen::Editor, Some(editor)) => editor
            .view(image_editor::ViewContext { i18n: ctx.i18n })
            .map(Message::ImageEditor),
        _ => upload::view(ctx.upload, upload::ViewContext { i18n: ctx.i18n })
            .map(Message::Upload),
    };

    let base = container(current)
        .width(Length::Fill)
        .height(Length::Fill);

    if !ctx.notifications.has_notifications() {
        return base.into();
    }

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
