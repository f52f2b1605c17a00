//! # Input Dispatcher
//!
//! The single writer of [`App`]. Owns the player and router collaborators
//! and applies the transition table:
//!
//! | list type        | select              | exit                               | play / pause     |
//! |------------------|---------------------|------------------------------------|------------------|
//! | main, shows      | navigate to item    | navigate back                      | ignored          |
//! | movies, episodes | play item           | stop if playing, else navigate back| resume / pause   |
//! | any              | up / down move the selection, wrapping                                         |
//!
//! `up`, `down` and `select` on an empty list do nothing. `exit` always
//! works so an empty list can be left.

use log::{debug, info, warn};

use crate::core::action::{Action, Effect, InputAction, action_for_key, action_for_remote};
use crate::core::navigation::ListType;
use crate::core::playback::PlaybackState;
use crate::core::router::{Route, Router};
use crate::core::state::{App, CatalogStatus};
use crate::playback::Player;

pub struct Dispatcher<P: Player, R: Router> {
    player: P,
    router: R,
}

impl<P: Player, R: Router> Dispatcher<P, R> {
    pub fn new(player: P, router: R) -> Self {
        Self { player, router }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    /// Load the screen for the router's current route.
    pub fn start(&mut self, app: &mut App) {
        app.show(self.router.current());
    }

    /// Reduce one action into the app.
    pub fn update(&mut self, app: &mut App, action: Action) -> Effect {
        match action {
            Action::Key(key) => {
                match action_for_key(&key) {
                    Some(input) => self.handle_action(app, input),
                    None => debug!("Unmapped key: {:?}", key),
                }
                Effect::None
            }
            Action::Remote(key) => {
                match action_for_remote(&key) {
                    Some(input) => self.handle_action(app, input),
                    None => debug!("Unmapped remote key: {:?}", key),
                }
                Effect::None
            }
            Action::CatalogLoaded(media) => {
                app.status_message = format!(
                    "Catalog: {} movies, {} shows",
                    media.movies.len(),
                    media.shows.len()
                );
                app.store.replace_all(media);
                app.catalog = CatalogStatus::Ready;
                app.show(self.router.current());
                Effect::SaveCatalog
            }
            Action::CatalogFailed(reason) => {
                warn!("Catalog unavailable: {}", reason);
                app.status_message = format!("Catalog unavailable: {reason}");
                app.catalog = CatalogStatus::Unavailable(reason);
                Effect::None
            }
            Action::PlaybackEnded => {
                info!("Playback ended: {}", app.playback.source_url);
                app.playback.reset();
                app.status_message = "Playback finished".to_string();
                Effect::None
            }
            Action::Quit => {
                if self.playback_active(app) {
                    self.stop_playback(app);
                }
                Effect::Quit
            }
        }
    }

    /// Apply one input action.
    pub fn handle_action(&mut self, app: &mut App, action: InputAction) {
        debug!(
            "Input {:?} on {:?} list (selected={})",
            action,
            app.navigation.list_type(),
            app.navigation.selected()
        );
        match action {
            InputAction::Up => app.navigation.previous(),
            InputAction::Down => app.navigation.next(),
            InputAction::Select => self.select(app),
            InputAction::Exit => self.exit(app),
            InputAction::Play => self.resume(app),
            InputAction::Pause => self.pause(app),
        }
    }

    /// Reap a player that finished on its own. Returns true if it had.
    pub fn poll_player(&mut self, app: &mut App) -> bool {
        if self.player.poll_finished() {
            self.update(app, Action::PlaybackEnded);
            true
        } else {
            false
        }
    }

    fn select(&mut self, app: &mut App) {
        let Some(url) = app.navigation.current_url().map(str::to_string) else {
            debug!("Select on empty list ignored");
            return;
        };
        match app.navigation.list_type() {
            ListType::Main | ListType::Shows => match Route::parse(&url) {
                Some(route) => {
                    self.router.navigate_to(route);
                    app.show(route);
                }
                None => warn!("Selected item is not a route: {}", url),
            },
            ListType::Movies | ListType::Episodes => self.start_playback(app, &url),
        }
    }

    fn exit(&mut self, app: &mut App) {
        if app.navigation.list_type().is_playable() && self.playback_active(app) {
            self.stop_playback(app);
        } else {
            self.navigate_back(app);
        }
    }

    fn navigate_back(&mut self, app: &mut App) {
        match self.router.navigate_back() {
            Some(route) => app.show(route),
            None => debug!("Already at the main menu"),
        }
    }

    fn start_playback(&mut self, app: &mut App, url: &str) {
        let label = app
            .navigation
            .selected_item()
            .map(|item| item.label.clone())
            .unwrap_or_else(|| url.to_string());
        match self.player.play(url) {
            Ok(()) => {
                self.player.request_fullscreen();
                app.playback = PlaybackState::started(url);
                app.status_message = format!("Playing {label}");
            }
            Err(e) => {
                warn!("Failed to play {}: {}", url, e);
                app.playback.reset();
                app.status_message = format!("Playback failed: {e}");
            }
        }
    }

    fn stop_playback(&mut self, app: &mut App) {
        match self.player.stop() {
            Ok(()) => app.status_message = "Stopped".to_string(),
            Err(e) => {
                warn!("Failed to stop player: {}", e);
                app.status_message = format!("Stop failed: {e}");
            }
        }
        app.playback.reset();
    }

    fn pause(&mut self, app: &mut App) {
        if !app.navigation.list_type().is_playable() || !app.playback.is_playing {
            return;
        }
        match self.player.pause() {
            Ok(()) => {
                app.playback.is_playing = false;
                app.status_message = "Paused".to_string();
            }
            Err(e) => {
                warn!("Failed to pause: {}", e);
                app.status_message = format!("Pause failed: {e}");
            }
        }
    }

    fn resume(&mut self, app: &mut App) {
        if !app.navigation.list_type().is_playable()
            || !app.playback.is_active()
            || app.playback.is_playing
        {
            return;
        }
        match self.player.resume() {
            Ok(()) => {
                app.playback.is_playing = true;
                app.status_message = "Playing".to_string();
            }
            Err(e) => {
                warn!("Failed to resume: {}", e);
                app.status_message = format!("Resume failed: {e}");
            }
        }
    }

    fn playback_active(&self, app: &App) -> bool {
        app.playback.is_active() || self.player.is_playing()
    }
}
