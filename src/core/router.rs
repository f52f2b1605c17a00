//! # Routes
//!
//! ```text
//! /               Main       main menu
//! /movies         Movies     every movie
//! /tv_shows       Shows      every show
//! /show/:showID   Episodes   episodes of one show
//! ```

use std::fmt;

use log::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Main,
    Movies,
    Shows,
    Episodes { show_id: u64 },
}

impl Route {
    /// Parse a path. Unknown paths return `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let trimmed = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match trimmed {
            "/" | "" => Some(Route::Main),
            "/movies" => Some(Route::Movies),
            "/tv_shows" => Some(Route::Shows),
            _ => trimmed
                .strip_prefix("/show/")
                .and_then(|id| id.parse().ok())
                .map(|show_id| Route::Episodes { show_id }),
        }
    }

    pub fn to_path(self) -> String {
        match self {
            Route::Main => "/".to_string(),
            Route::Movies => "/movies".to_string(),
            Route::Shows => "/tv_shows".to_string(),
            Route::Episodes { show_id } => format!("/show/{show_id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Page navigation collaborator.
pub trait Router {
    fn navigate_to(&mut self, route: Route);

    /// Go back one page. Returns the page now showing, or `None` when
    /// already at the root.
    fn navigate_back(&mut self) -> Option<Route>;

    fn current(&self) -> Route;
}

/// Router backed by an in-memory history stack rooted at `Main`.
#[derive(Debug)]
pub struct HistoryRouter {
    history: Vec<Route>,
}

impl HistoryRouter {
    pub fn new() -> Self {
        Self {
            history: vec![Route::Main],
        }
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for HistoryRouter {
    fn navigate_to(&mut self, route: Route) {
        debug!("Navigate: {} -> {}", self.current(), route);
        self.history.push(route);
    }

    fn navigate_back(&mut self) -> Option<Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        let current = self.current();
        debug!("Navigate back -> {}", current);
        Some(current)
    }

    fn current(&self) -> Route {
        self.history.last().copied().unwrap_or_default()
    }
}
