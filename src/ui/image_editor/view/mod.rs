// SPDX-License-Identifier: MPL-2.0
//! Editor view composition helpers.

pub mod canvas;
pub mod error_panel;
pub mod sheet_modal;
pub mod sidebar;
pub mod toolbar;

use iced::widget::{container, Column, Row, Stack};
use iced::{Element, Length};

use super::{Message, State, ViewContext};
use canvas::CanvasModel;
use sidebar::SidebarModel;
use toolbar::ToolbarModel;

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toolbar_model = ToolbarModel::from_state(state);
    let toolbar = toolbar::view(&toolbar_model, &ctx);

    let sidebar = sidebar::view(SidebarModel::from_state(state), &ctx);

    let mut workspace = Column::new();
    if let Some(error) = state.error() {
        workspace = workspace.push(error_panel::view(error, &ctx));
    }
    let canvas_model = CanvasModel::from_state(state, &ctx);
    workspace = workspace.push(canvas::view(canvas_model, &ctx));

    let main_row = Row::new().spacing(0.0).push(sidebar).push(workspace);
    let content = container(Column::new().push(toolbar).push(main_row))
        .width(Length::Fill)
        .height(Length::Fill);

    match state.sheet().preview() {
        Some(preview) => Stack::new()
            .push(content)
            .push(sheet_modal::view(preview, state.sheet().copies, &ctx))
            .into(),
        None => content.into(),
    }
}
