//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::{CatalogError, CatalogSource, Episode, MediaInfo, MediaStore, Movie, Show};
use crate::core::router::{HistoryRouter, Route, Router};
use crate::core::state::App;
use crate::playback::{PlaybackError, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCall {
    Play(String),
    Pause,
    Resume,
    Stop,
    Fullscreen,
}

/// A player that records every request instead of playing anything.
#[derive(Default)]
pub struct RecordingPlayer {
    pub calls: Vec<PlayerCall>,
    playing: bool,
    fail_play: bool,
    finished: bool,
}

impl RecordingPlayer {
    /// A player whose `play` always fails to spawn.
    pub fn failing() -> Self {
        Self {
            fail_play: true,
            ..Default::default()
        }
    }

    /// Simulate the media running out.
    pub fn finish(&mut self) {
        self.playing = false;
        self.finished = true;
    }
}

impl Player for RecordingPlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        if self.fail_play {
            return Err(PlaybackError::Spawn {
                command: "recording".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no player"),
            });
        }
        self.calls.push(PlayerCall::Play(url.to_string()));
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.calls.push(PlayerCall::Pause);
        self.playing = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        self.calls.push(PlayerCall::Resume);
        self.playing = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        self.calls.push(PlayerCall::Stop);
        self.playing = false;
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn request_fullscreen(&mut self) {
        self.calls.push(PlayerCall::Fullscreen);
    }

    fn poll_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterCall {
    NavigateTo(Route),
    NavigateBack,
}

/// A history router that also records every request.
#[derive(Default)]
pub struct RecordingRouter {
    pub calls: Vec<RouterCall>,
    inner: HistoryRouter,
}

impl Router for RecordingRouter {
    fn navigate_to(&mut self, route: Route) {
        self.calls.push(RouterCall::NavigateTo(route));
        self.inner.navigate_to(route);
    }

    fn navigate_back(&mut self) -> Option<Route> {
        self.calls.push(RouterCall::NavigateBack);
        self.inner.navigate_back()
    }

    fn current(&self) -> Route {
        self.inner.current()
    }
}

/// Serves a fixed catalog.
pub struct StaticCatalog(pub MediaInfo);

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<MediaInfo, CatalogError> {
        Ok(self.0.clone())
    }
}

fn episode(id: u64, show: u64, season: u32, number: u32, name: Option<&str>) -> Episode {
    Episode {
        id,
        name: name.map(str::to_string),
        number: Some(number),
        season: Some(season),
        show,
        url: Some(format!("/tv/{show}/{season}x{number}.mkv")),
    }
}

/// Two movies, two shows; show 1 has episodes stored out of order.
pub fn sample_media() -> MediaInfo {
    MediaInfo {
        movies: vec![
            Movie {
                id: 1,
                name: "Alien".to_string(),
                url: "/movies/alien.mp4".to_string(),
            },
            Movie {
                id: 2,
                name: "Brazil".to_string(),
                url: "/movies/brazil.mp4".to_string(),
            },
        ],
        shows: vec![
            Show {
                id: 1,
                name: "Firefly".to_string(),
            },
            Show {
                id: 2,
                name: "Spaced".to_string(),
            },
        ],
        episodes: vec![
            episode(10, 1, 2, 1, None),
            episode(11, 1, 1, 2, Some("The Train Job")),
            episode(12, 1, 1, 1, Some("Pilot")),
            episode(20, 2, 1, 1, Some("Beginnings")),
        ],
    }
}

/// Creates a test App loaded with `sample_media()`.
pub fn test_app() -> App {
    App::new(MediaStore::from_media(sample_media(), 0))
}

/// A fresh, empty directory under the system temp dir.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("telly-test-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}
