//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! translates keyboard events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm. It also
//! wires the runtime collaborators together: the external player, the
//! history router, the catalog fetch and the optional remote listener.
//!
//! ## Redraw Strategy
//!
//! The loop polls the terminal with a timeout and redraws only when
//! something changed: a terminal event arrived, a background action was
//! applied, the player exited, or the navigation revision moved.
//!
//! The timeout is short (~40ms) while background actions are expected
//! (remote listening, catalog loading, playback) and long (250ms) when idle.
//! Background actions are drained at the top of every turn, so a remote key
//! waits at most one short poll.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::Path;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::Input;
use crate::catalog::{CatalogSource, HttpCatalog, MediaStore, cache};
use crate::core::action::{Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::dispatch::Dispatcher;
use crate::core::router::{HistoryRouter, Router};
use crate::core::state::{App, CatalogStatus};
use crate::playback::{ExternalPlayer, Player};
use crate::remote::RemoteListener;
use crate::tui::components::MenuListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ACTIVE_POLL: Duration = Duration::from_millis(40);
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub menu_list: MenuListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hides the cursor for the session. On drop, shows it again and runs
/// `restore` (leaves raw mode and the alternate screen), including when the
/// loop bails out with an error.
struct TerminalModeGuard {
    restore: fn(),
}

impl TerminalModeGuard {
    fn enter(restore: fn()) -> Self {
        match execute!(stdout(), Hide) {
            Ok(()) => info!("Terminal modes enabled (hidden cursor)"),
            Err(e) => warn!("Failed to hide cursor: {}", e),
        }
        Self { restore }
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        (self.restore)();
    }
}

/// What one drain of the background channel did.
#[derive(Debug, Default, PartialEq, Eq)]
struct Drained {
    applied: usize,
    quit: bool,
}

/// Apply every queued background action (catalog results, remote keys).
fn drain_background<P: Player, R: Router>(
    dispatcher: &mut Dispatcher<P, R>,
    app: &mut App,
    rx: &mpsc::Receiver<Action>,
    cache_path: Option<&Path>,
) -> Drained {
    let mut drained = Drained::default();
    while let Ok(action) = rx.try_recv() {
        drained.applied += 1;
        debug!("Event loop received: {:?}", action);
        match dispatcher.update(app, action) {
            Effect::Quit => {
                drained.quit = true;
                break;
            }
            Effect::SaveCatalog => save_catalog(app, cache_path),
            Effect::None => {}
        }
    }
    drained
}

/// Short while something may arrive on the background channel.
fn poll_timeout(remote_active: bool, app: &App) -> Duration {
    if remote_active || app.catalog == CatalogStatus::Loading || app.playback.is_active() {
        ACTIVE_POLL
    } else {
        IDLE_POLL
    }
}

/// Status line for a store loaded from the cache.
fn cached_status(store: &MediaStore) -> Option<String> {
    if store.is_empty() {
        return None;
    }
    let when = store
        .refreshed_at()
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string());
    Some(match when {
        Some(when) => format!("Showing catalog cached {when}, refreshing…"),
        None => "Showing cached catalog, refreshing…".to_string(),
    })
}

/// Build the store from the on-disk cache, if there is one.
fn load_cached_store(cache_path: Option<&Path>) -> MediaStore {
    let Some(path) = cache_path else {
        return MediaStore::new();
    };
    match cache::load(path) {
        Ok(Some(cached)) => MediaStore::from_media(cached.media, cached.fetched_at),
        Ok(None) => MediaStore::new(),
        Err(e) => {
            warn!("Ignoring unreadable catalog cache {}: {}", path.display(), e);
            MediaStore::new()
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let player = ExternalPlayer::new(
        config.player_command.clone(),
        config.player_args.clone(),
        config.media_source.clone(),
    )
    .with_keys(config.pause_key.clone(), config.quit_key.clone());
    let mut dispatcher = Dispatcher::new(player, HistoryRouter::new());

    let mut app = App::new(load_cached_store(config.cache_path.as_deref()));
    if let Some(status) = cached_status(&app.store) {
        app.status_message = status;
    }
    dispatcher.start(&mut app);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let source: Arc<dyn CatalogSource> = Arc::new(HttpCatalog::new(&config.media_source));
    spawn_catalog_fetch(source, tx.clone());

    // Held for the lifetime of the loop; dropping it kills the helper
    let remote = match config.input {
        Input::Cec => {
            match RemoteListener::spawn(&config.remote_command, &config.remote_args, tx.clone()) {
                Ok(listener) => Some(listener),
                Err(e) => {
                    warn!("Remote helper '{}' failed to start: {}", config.remote_command, e);
                    app.status_message = format!("Remote unavailable ({e}), keyboard only");
                    None
                }
            }
        }
        Input::Keyboard => None,
    };

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::enter(ratatui::restore);

    let mut needs_redraw = true; // Force first frame
    let mut drawn_revision = app.navigation.revision();

    loop {
        if dispatcher.poll_player(&mut app) {
            needs_redraw = true;
        }

        // Handle background task actions (catalog, remote keys)
        let drained = drain_background(&mut dispatcher, &mut app, &rx, config.cache_path.as_deref());
        if drained.quit {
            break;
        }
        if drained.applied > 0 {
            needs_redraw = true;
        }

        if needs_redraw || app.navigation.revision() != drawn_revision {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            drawn_revision = app.navigation.revision();
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let first_event = poll_event_timeout(poll_timeout(remote.is_some(), &app));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::Quit => Action::Quit,
                TuiEvent::Key(name) => Action::Key(name),
            };
            if dispatcher.update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Telly shutting down");
    Ok(())
}

fn save_catalog(app: &App, cache_path: Option<&Path>) {
    let Some(path) = cache_path else {
        return;
    };
    if let Err(e) = cache::save(path, &app.store.to_media_info()) {
        warn!("Failed to cache catalog at {}: {}", path.display(), e);
    }
}

/// Fetch the catalog in the background. The result comes back as an action;
/// there is no retry.
fn spawn_catalog_fetch(source: Arc<dyn CatalogSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog fetch from {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch().await {
            Ok(media) => Action::CatalogLoaded(media),
            Err(e) => Action::CatalogFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send catalog result: receiver dropped");
        }
    });
}
