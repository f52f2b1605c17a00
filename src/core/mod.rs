//! # Core Application Logic
//!
//! This module contains Telly's navigation and input logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!    keyboard ──┐                ┌─────────────────────────┐
//!               ├─ key name ───▶ │       Dispatcher         │ ──▶ Player (play/pause/stop)
//!    cec remote ┘                │  keymap → InputAction    │ ──▶ Router (navigate/back)
//!                                │  transition table        │
//!    catalog fetch ─ Action ───▶ │  update(app, action)     │
//!                                └───────────┬─────────────┘
//!                                            │ writes
//!                                            ▼
//!                                ┌─────────────────────────┐
//!                                │          App             │ ◀── renderer reads,
//!                                │  NavigationState         │     redraws on revision
//!                                │  PlaybackState           │
//!                                │  MediaStore              │
//!                                └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: `InputAction`, `Action`, `Effect` and the key tables
//! - [`navigation`]: the navigable list and its selection
//! - [`dispatch`]: the only writer of `App`
//! - [`config`]: layered configuration (file, env, CLI)
//! - [`playback`]: playback state as the UI sees it
//! - [`router`]: routes and navigation history
//! - [`screen`]: one typed screen per route

pub mod action;
pub mod config;
pub mod dispatch;
pub mod navigation;
pub mod playback;
pub mod router;
pub mod screen;
pub mod state;
