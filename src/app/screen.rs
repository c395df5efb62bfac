// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for the application.

use crate::error::Error;
use crate::ui::gallery;

/// What the window currently shows.
#[derive(Debug)]
pub enum Screen {
    /// The gallery loaded and the controller is live.
    Gallery(gallery::State),
    /// The gallery could not be built; the error is shown instead.
    Unavailable(Error),
}

impl Screen {
    pub fn gallery(&self) -> Option<&gallery::State> {
        match self {
            Screen::Gallery(state) => Some(state),
            Screen::Unavailable(_) => None,
        }
    }
}
