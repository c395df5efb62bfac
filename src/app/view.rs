// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{Message, Screen};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use iced::widget::{text, Column, Container, Text};
use iced::{Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a Screen,
    /// i18n key of a startup warning, if any.
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Gallery(state) => gallery::view(GalleryViewContext {
            i18n: ctx.i18n,
            state,
        })
        .map(Message::Gallery),
        Screen::Unavailable(error) => view_unavailable(ctx.i18n, error),
    };

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(key) = ctx.warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            )
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::MD]),
        );
    }

    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_unavailable<'a>(i18n: &I18n, error: &Error) -> Element<'a, Message> {
    centered_error_view(
        ErrorDisplay::new()
            .title(i18n.tr("error-gallery-title"))
            .message(i18n.tr(error.i18n_key()))
            .details(error.to_string())
            .details_heading(i18n.tr("error-details-heading")),
    )
}
