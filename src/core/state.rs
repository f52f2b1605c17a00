//! # Application State
//!
//! Core state for Telly. Domain logic only, no TUI-specific types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── navigation: NavigationState   // list on screen + selection
//! ├── playback: PlaybackState       // what the player is doing
//! ├── store: MediaStore             // catalog tables
//! ├── catalog: CatalogStatus        // loading / ready / unavailable
//! ├── screen_title: String          // title of the loaded screen
//! └── status_message: String        // status bar text
//! ```
//!
//! Only the `Dispatcher` writes to `App`.

use log::debug;

use crate::catalog::MediaStore;
use crate::core::navigation::NavigationState;
use crate::core::playback::PlaybackState;
use crate::core::router::Route;
use crate::core::screen::screen_for;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Loading,
    Ready,
    Unavailable(String),
}

pub struct App {
    pub navigation: NavigationState,
    pub playback: PlaybackState,
    pub store: MediaStore,
    pub catalog: CatalogStatus,
    pub screen_title: String,
    pub status_message: String,
}

impl App {
    pub fn new(store: MediaStore) -> Self {
        Self {
            navigation: NavigationState::new(),
            playback: PlaybackState::default(),
            store,
            catalog: CatalogStatus::Loading,
            screen_title: String::new(),
            status_message: String::from("Welcome to Telly!"),
        }
    }

    /// Load the screen for `route` into the navigation state.
    pub fn show(&mut self, route: Route) {
        let screen = screen_for(route);
        let items = screen.load(&self.store);
        debug!("Showing {} ({} items)", route, items.len());
        self.screen_title = screen.title(&self.store);
        self.navigation.set_list_type(screen.list_type());
        self.navigation.set_list(items);
    }
}
