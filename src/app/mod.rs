// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between configuration, localization,
//! and the gallery screen.
//!
//! `App::new` resolves the startup inputs (CLI flags, `settings.toml`, the
//! gallery source) and builds the single [`GalleryController`] the window
//! navigates. Every later change arrives as a [`Message`] on the Iced update
//! loop, and `view` re-reads the controller afterwards.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::error::Result;
use crate::gallery::{load_gallery, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// i18n key of the warning raised while loading settings.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the gallery and positions the controller at `start`.
fn build_gallery_screen(directory: Option<&Path>, start: usize) -> Result<gallery::State> {
    let artworks = load_gallery(directory)?;
    let controller = GalleryController::new(artworks, start)?;
    Ok(gallery::State::new(controller))
}

impl App {
    /// Initializes application state from the launcher flags and the
    /// persisted settings.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let directory = flags.gallery_dir.or(config.gallery.directory);
        let start = flags
            .start
            .or(config.gallery.start_index)
            .unwrap_or(config::DEFAULT_START_INDEX);

        let screen = match build_gallery_screen(directory.as_deref(), start) {
            Ok(state) => {
                tracing::info!(
                    total = state.controller().total(),
                    cursor = state.controller().cursor(),
                    "gallery ready"
                );
                Screen::Gallery(state)
            }
            Err(err) => {
                tracing::error!(%err, "gallery unavailable");
                Screen::Unavailable(err)
            }
        };

        let app = App {
            i18n,
            screen,
            theme_mode: config.general.theme_mode,
            config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen.gallery() {
            Some(state) => {
                let artwork = state.controller().current().title();
                format!("{artwork} - {app_name}")
            }
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(&self.screen)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                let Screen::Gallery(state) = &mut self.screen else {
                    return Task::none();
                };
                match gallery::update(state, gallery_message) {
                    gallery::Event::Navigated { index } => {
                        tracing::trace!(index, "artwork changed");
                    }
                    gallery::Event::None => {}
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            warning: self.config_warning.as_deref(),
        })
    }
}
