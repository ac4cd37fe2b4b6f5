// SPDX-License-Identifier: MPL-2.0
//! Static reference card for the target document's photo rules.

use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Column, Row, Space};
use iced::{Element, Length};

use super::super::super::{Message, ViewContext};
use super::section;

/// (label key, value key) pairs, top to bottom.
const ROWS: [(&str, &str); 8] = [
    ("requirements-country", "requirements-country-value"),
    ("requirements-document", "requirements-document-value"),
    ("requirements-size", "requirements-size-value"),
    ("requirements-head-height", "requirements-head-height-value"),
    ("requirements-top-margin", "requirements-top-margin-value"),
    ("requirements-background", "requirements-background-value"),
    ("requirements-resolution", "requirements-resolution-value"),
    ("requirements-printable", "requirements-printable-value"),
];

pub fn panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rows = ROWS.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, (label, value)| {
            column.push(
                Row::new()
                    .push(
                        text(ctx.i18n.tr(label))
                            .size(typography::BODY_SM)
                            .color(palette::SLATE_400),
                    )
                    .push(Space::new().width(Length::Fill))
                    .push(text(ctx.i18n.tr(value)).size(typography::BODY_SM)),
            )
        },
    );

    section(ctx.i18n.tr("requirements-title"), rows)
}
