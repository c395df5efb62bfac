// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: artwork frame, details card, and navigation buttons.
//!
//! The screen owns a [`GalleryController`] and re-renders from its read model
//! after every message, so the displayed artwork, the details, and the
//! enabled state of the buttons always come from the same cursor.

pub mod layout;

pub use layout::{ArtworkLayout, Orientation};

use crate::gallery::{Direction, GalleryController, GalleryView};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Font, Length, Padding, Size};

/// Local state of the gallery screen.
#[derive(Debug, Clone)]
pub struct State {
    controller: GalleryController,
    orientation: Orientation,
}

impl State {
    pub fn new(controller: GalleryController) -> Self {
        Self {
            controller,
            orientation: Orientation::default(),
        }
    }

    pub fn controller(&self) -> &GalleryController {
        &self.controller
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousPressed,
    NextPressed,
    WindowResized(Size),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The cursor moved; `index` is the new 0-based position.
    Navigated { index: usize },
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::PreviousPressed => navigate(state, Direction::Previous),
        Message::NextPressed => navigate(state, Direction::Next),
        Message::WindowResized(size) => {
            let orientation = Orientation::from_size(size);
            if orientation != state.orientation {
                tracing::debug!(?orientation, "gallery orientation changed");
                state.orientation = orientation;
            }
            Event::None
        }
    }
}

fn navigate(state: &mut State, direction: Direction) -> Event {
    if state.controller.navigate(direction) {
        let index = state.controller.cursor();
        tracing::debug!(?direction, index, "gallery navigated");
        Event::Navigated { index }
    } else {
        Event::None
    }
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let model = ctx.state.controller.view();
    let layout = ArtworkLayout::for_orientation(ctx.state.orientation);

    let frame = artwork_frame(&model, layout);

    let rest = Column::new()
        .width(Length::Fill)
        .height(Length::FillPortion(layout.rest_height))
        .spacing(spacing::MD)
        .padding(Padding {
            top: spacing::MD,
            ..Padding::ZERO
        })
        .push(Space::new().height(Length::Fill))
        .push(details_card(ctx.i18n, &model))
        .push(navigation_row(ctx.i18n, &model));

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .push(frame)
        .push(rest)
        .into()
}

fn artwork_frame<'a>(model: &GalleryView<'a>, layout: ArtworkLayout) -> Element<'a, Message> {
    let picture = image::Image::new(model.image.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let frame = Container::new(picture)
        .width(Length::FillPortion(layout.frame_width))
        .height(Length::Fill)
        .padding(Padding::from([
            sizing::ARTWORK_MAT_VERTICAL,
            sizing::ARTWORK_MAT_HORIZONTAL,
        ]))
        .style(styles::container::artwork_frame);

    let mut row = Row::new()
        .width(Length::Fill)
        .height(Length::FillPortion(layout.frame_height));

    if layout.side_margin > 0 {
        row = row
            .push(Space::new().width(Length::FillPortion(layout.side_margin)))
            .push(frame)
            .push(Space::new().width(Length::FillPortion(layout.side_margin)));
    } else {
        row = row.push(frame);
    }

    row.into()
}

const TITLE_FONT: Font = Font {
    weight: Weight::Light,
    ..Font::DEFAULT
};

const ARTIST_FONT: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

const YEAR_FONT: Font = Font {
    weight: Weight::Light,
    ..Font::DEFAULT
};

/// Card sized to its text and centered under the frame.
fn details_card<'a>(i18n: &I18n, model: &GalleryView<'a>) -> Element<'a, Message> {
    let title = Text::new(model.title.to_string())
        .size(typography::TITLE_ARTWORK)
        .font(TITLE_FONT);

    let year = i18n.tr_with_args("gallery-year", &[("year", model.year)]);

    let byline = Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(model.artist_name.to_string())
                .size(typography::BODY_LG)
                .font(ARTIST_FONT),
        )
        .push(Text::new(year).size(typography::BODY_LG).font(YEAR_FONT));

    let content = Column::new()
        .spacing(spacing::XS)
        .push(title)
        .push(byline);

    let card = Container::new(content)
        .width(Length::Shrink)
        .padding(spacing::MD)
        .style(styles::container::details_card);

    Container::new(card)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn navigation_row<'a>(i18n: &I18n, model: &GalleryView<'a>) -> Element<'a, Message> {
    let previous = button(
        Text::new(i18n.tr("gallery-previous"))
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON_MIN_WIDTH))
    .padding(spacing::SM)
    .style(styles::button::navigation)
    .on_press_maybe(model.can_go_previous.then_some(Message::PreviousPressed));

    let next = button(
        Text::new(i18n.tr("gallery-next"))
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON_MIN_WIDTH))
    .padding(spacing::SM)
    .style(styles::button::navigation)
    .on_press_maybe(model.can_go_next.then_some(Message::NextPressed));

    let position = model.position.to_string();
    let total = model.total.to_string();
    let counter = Text::new(i18n.tr_with_args(
        "gallery-position",
        &[("position", position.as_str()), ("total", total.as_str())],
    ))
    .size(typography::CAPTION);

    Row::new()
        .width(Length::Fill)
        .align_y(Vertical::Center)
        .push(previous)
        .push(Space::new().width(Length::Fill))
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(next)
        .into()
}
