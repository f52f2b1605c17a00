//! # TUI Components
//!
//! Each component receives its data as props (struct fields) and renders
//! into the area it is given. State that must survive between frames, such
//! as the list scroll offset, lives in a separate `*State` struct owned by
//! `TuiState`.
//!
//! ```text
//! components/
//! ├── title_bar.rs    (app name, screen title, status)
//! ├── menu_list.rs    (selectable list / empty state)
//! ├── now_playing.rs  (overlay while the player is active)
//! └── help_bar.rs     (key hints)
//! ```

mod help_bar;
mod menu_list;
mod now_playing;
mod title_bar;

pub use help_bar::HelpBar;
pub use menu_list::{MenuList, MenuListState};
pub use now_playing::NowPlaying;
pub use title_bar::TitleBar;
