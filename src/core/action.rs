//! # Actions
//!
//! Everything that can happen in Telly becomes an `Action`.
//! User presses Enter? That's `Action::Key("Enter")`.
//! Remote sends "select"? That's `Action::Remote("select")`.
//! Catalog arrives? That's `Action::CatalogLoaded(media)`.
//!
//! Raw key and remote names are mapped through static tables to the small
//! closed set of `InputAction`s. Anything not in a table is ignored.
//!
//! ```text
//! App + Action  →  Dispatcher::update()  →  App' + Effect
//! ```

use crate::catalog::MediaInfo;

/// Abstract navigation/playback commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Up,
    Down,
    Select,
    Exit,
    Play,
    Pause,
}

const KEYBOARD: &[(&str, InputAction)] = &[
    ("ArrowUp", InputAction::Up),
    ("w", InputAction::Up),
    ("ArrowDown", InputAction::Down),
    ("s", InputAction::Down),
    ("Enter", InputAction::Select),
    ("Escape", InputAction::Exit),
    ("p", InputAction::Play),
    ("o", InputAction::Pause),
];

const REMOTE: &[(&str, InputAction)] = &[
    ("up", InputAction::Up),
    ("down", InputAction::Down),
    ("select", InputAction::Select),
    ("exit", InputAction::Exit),
    ("play", InputAction::Play),
    ("pause", InputAction::Pause),
];

fn lookup(table: &[(&str, InputAction)], name: &str) -> Option<InputAction> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, action)| *action)
}

/// Map a keyboard key name (`ArrowUp`, `Enter`, `w`, ...) to an action.
pub fn action_for_key(key: &str) -> Option<InputAction> {
    lookup(KEYBOARD, key)
}

/// Map a CEC remote key name (`up`, `select`, ...) to an action.
pub fn action_for_remote(key: &str) -> Option<InputAction> {
    lookup(REMOTE, key)
}

/// Events fed into the dispatcher.
#[derive(Debug)]
pub enum Action {
    /// Raw keyboard key name.
    Key(String),
    /// Raw remote key name from the CEC helper.
    Remote(String),
    CatalogLoaded(MediaInfo),
    CatalogFailed(String),
    /// The player finished on its own.
    PlaybackEnded,
    Quit,
}

/// I/O the runtime must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SaveCatalog,
    Quit,
}
