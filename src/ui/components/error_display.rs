// SPDX-License-Identifier: MPL-2.0
//! Error panel shown in place of a screen that could not be built.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{centered_error_view, ErrorDisplay};
//!
//! centered_error_view(
//!     ErrorDisplay::new()
//!         .title("Gallery unavailable")
//!         .message("The gallery has no artworks.")
//!         .details("Invalid initial index: the gallery is empty"),
//! )
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorDisplay {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    details_heading_label: String,
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            details_heading_label: "Technical details".to_string(),
        }
    }
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details shown under a separator.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the localized heading of the details section.
    pub fn details_heading(mut self, heading: impl Into<String>) -> Self {
        self.details_heading_label = heading.into();
        self
    }

    /// Renders the panel.
    pub fn view<Message: 'static>(self) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            let message = Text::new(message_text).size(typography::BODY);
            content = content.push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(details_text) = self.details {
            let secondary = |theme: &Theme| text::Style {
                color: Some(theme.extended_palette().secondary.base.text),
            };

            let details_column = Column::new()
                .spacing(spacing::XS)
                .width(Length::Fill)
                .push(rule::horizontal(1))
                .push(
                    Text::new(self.details_heading_label)
                        .size(typography::BODY)
                        .style(secondary),
                )
                .push(
                    Text::new(details_text)
                        .size(typography::CAPTION)
                        .style(secondary),
                );

            content = content.push(
                Container::new(details_column)
                    .width(Length::Fill)
                    .padding(spacing::SM),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(sizing::ERROR_PANEL_WIDTH)
            .padding(spacing::LG)
            .style(styles::container::error_panel)
            .into()
    }
}

/// Centers the panel in the available space.
pub fn centered_error_view<Message: 'static>(
    error_display: ErrorDisplay,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_all_parts() {
        let display = ErrorDisplay::new()
            .title("Gallery unavailable")
            .message("The gallery has no artworks.")
            .details("Invalid initial index: the gallery is empty");

        assert_eq!(display.title.as_deref(), Some("Gallery unavailable"));
        assert_eq!(
            display.message.as_deref(),
            Some("The gallery has no artworks.")
        );
        assert_eq!(
            display.details.as_deref(),
            Some("Invalid initial index: the gallery is empty")
        );
    }

    #[test]
    fn details_heading_defaults_to_english() {
        assert_eq!(ErrorDisplay::new().details_heading_label, "Technical details");
    }

    #[test]
    fn details_heading_can_be_localized() {
        let display = ErrorDisplay::new().details_heading("Détails techniques");
        assert_eq!(display.details_heading_label, "Détails techniques");
    }
}
