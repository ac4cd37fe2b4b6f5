// SPDX-License-Identifier: MPL-2.0
//! Sidebar layout composition.

pub mod adjustments_panel;
pub mod ai_panel;
pub mod crop_panel;
pub mod export_panel;
pub mod requirements_panel;

use crate::application::port::AiIntensity;
use crate::domain::editing::{CropRatio, ImageFilters, RotationDegrees};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_editor::GuideToggles;
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, text, Column, Scrollable};
use iced::{Element, Length};

use super::super::{Message, SidebarMessage, State, ViewContext};

/// Everything the sidebar panels read.
pub struct SidebarModel {
    pub filters: ImageFilters,
    pub cropping: bool,
    pub busy: bool,
    pub ratio: CropRatio,
    pub rotation: RotationDegrees,
    pub guides: GuideToggles,
    pub intensity: AiIntensity,
}

impl SidebarModel {
    pub fn from_state(state: &State) -> Self {
        Self {
            filters: state.filters(),
            cropping: state.is_cropping(),
            busy: state.is_busy(),
            ratio: state.crop().ratio,
            rotation: state
                .crop()
                .mode
                .session()
                .map(|session| session.rotation)
                .unwrap_or_default(),
            guides: state.guides(),
            intensity: state.enhance().intensity,
        }
    }
}

pub fn view<'a>(model: SidebarModel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sections = Column::new()
        .spacing(spacing::SM)
        .push(crop_panel::panel(&model, ctx))
        .push(adjustments_panel::panel(&model, ctx))
        .push(ai_panel::panel(&model, ctx))
        .push(export_panel::panel(&model, ctx))
        .push(requirements_panel::panel(ctx));

    let scrollable = Scrollable::new(sections)
        .direction(Direction::Vertical(Scrollbar::new()))
        .height(Length::Fill)
        .width(Length::Fill);

    container(scrollable)
        .padding(spacing::SM)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// Titled panel wrapper shared by every section.
pub(super) fn section<'a>(
    title: String,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XS)
            .push(text(title).size(typography::BODY_LG))
            .push(body),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::container::panel)
    .into()
}

/// Button in a one-of-many group.
pub(super) fn choice<'a>(
    label: String,
    selected: bool,
    message: Option<SidebarMessage>,
) -> Element<'a, Message> {
    button(text(label).size(typography::BODY_SM).center())
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(if selected {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .on_press_maybe(message.map(Message::Sidebar))
        .into()
}
