// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to the gallery screen:
//! - the opening size and later resizes update the orientation
//! - Left/Right arrow keys move the cursor when no widget captured them

use super::{Message, Screen};
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

/// Creates the event subscription for the current screen.
pub fn create_event_subscription(screen: &Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery(_) => event::listen_with(|event, status, _window_id| {
            route_gallery_event(event, status).map(Message::Gallery)
        }),
        Screen::Unavailable(_) => Subscription::none(),
    }
}

/// Maps a native event to a gallery message.
pub(crate) fn route_gallery_event(event: Event, status: event::Status) -> Option<gallery::Message> {
    match event {
        Event::Window(
            window::Event::Opened { size, .. } | window::Event::Resized(size),
        ) => Some(gallery::Message::WindowResized(size)),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if status == event::Status::Ignored =>
        {
            match key {
                Key::Named(Named::ArrowLeft) => Some(gallery::Message::PreviousPressed),
                Key::Named(Named::ArrowRight) => Some(gallery::Message::NextPressed),
                _ => None,
            }
        }
        _ => None,
    }
}
