// SPDX-License-Identifier: MPL-2.0
//! Print sheet preview modal.

use crate::domain::editing::SheetCopies;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::image_editor::overlay::{Backdrop, PhotoCanvas};
use crate::ui::image_editor::SheetPreview;
use crate::ui::styles;
use iced::widget::{button, center, container, text, Canvas, Column, Row, Space};
use iced::{Alignment, Element, Length};

use super::super::{Message, SheetMessage, ViewContext};

fn sheet_button<'a>(
    label: String,
    message: SheetMessage,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .on_press(Message::Sheet(message))
        .into()
}

pub fn view<'a>(
    preview: &'a SheetPreview,
    copies: SheetCopies,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let copies_row = SheetCopies::ALL.iter().fold(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(ctx.i18n.tr("sheet-copies")).size(typography::BODY_SM)),
        |row, &option| {
            let count = option.count().to_string();
            row.push(sheet_button(
                ctx.i18n.tr_with_args("sheet-copies-option", &[("count", &count)]),
                SheetMessage::SetCopies(option),
                if option == copies {
                    styles::button::selected
                } else {
                    styles::button::unselected
                },
            ))
        },
    );

    let percent = format!("{:.0}", preview.viewport().zoom().as_percent());
    let header = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(text(ctx.i18n.tr("sheet-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(copies_row)
        .push(Space::new().width(spacing::MD))
        .push(sheet_button(
            ctx.i18n.tr("editor-zoom-out"),
            SheetMessage::ZoomOut,
            styles::button::unselected,
        ))
        .push(
            text(ctx.i18n.tr_with_args("editor-zoom-label", &[("percent", &percent)]))
                .size(typography::BODY_SM),
        )
        .push(sheet_button(
            ctx.i18n.tr("editor-zoom-in"),
            SheetMessage::ZoomIn,
            styles::button::unselected,
        ))
        .push(sheet_button(
            ctx.i18n.tr("editor-zoom-fit"),
            SheetMessage::Fit,
            styles::button::unselected,
        ));

    let program = PhotoCanvas {
        backdrop: Some(Backdrop::Placed {
            handle: preview.handle(),
            rect: preview.viewport().image_rect(preview.size()),
        }),
        captions: Vec::new(),
        surface: preview.surface(),
        crop: None,
        dragging: preview.is_dragging(),
        on_event: |message| Message::Sheet(SheetMessage::Canvas(message)),
    };
    let canvas = container(Canvas::new(program).width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::canvas);

    let footer = Row::new()
        .spacing(spacing::XS)
        .push(text(ctx.i18n.tr("sheet-hint")).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(sheet_button(
            ctx.i18n.tr("sheet-close"),
            SheetMessage::Close,
            styles::button::unselected,
        ))
        .push(sheet_button(
            ctx.i18n.tr("sheet-download"),
            SheetMessage::Download,
            styles::button::primary,
        ));

    let modal = container(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(canvas)
            .push(footer),
    )
    .padding(spacing::MD)
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .height(Length::Fixed(sizing::MODAL_HEIGHT))
    .style(styles::container::modal);

    container(center(modal))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop)
        .into()
}
