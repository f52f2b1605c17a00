//! # Screens
//!
//! One screen per route. A screen knows what kind of list it shows, how to
//! title it, and how to load its items from the media store.

use crate::catalog::MediaStore;
use crate::core::navigation::{ListItem, ListType};
use crate::core::router::Route;

pub trait Screen {
    fn list_type(&self) -> ListType;

    fn title(&self, store: &MediaStore) -> String;

    fn load(&self, store: &MediaStore) -> Vec<ListItem>;
}

pub struct MainMenu;

impl Screen for MainMenu {
    fn list_type(&self) -> ListType {
        ListType::Main
    }

    fn title(&self, _store: &MediaStore) -> String {
        "Home".to_string()
    }

    fn load(&self, _store: &MediaStore) -> Vec<ListItem> {
        vec![
            ListItem::new("Movies", Route::Movies.to_path()),
            ListItem::new("TV Shows", Route::Shows.to_path()),
        ]
    }
}

pub struct MovieList;

impl Screen for MovieList {
    fn list_type(&self) -> ListType {
        ListType::Movies
    }

    fn title(&self, _store: &MediaStore) -> String {
        "Movies".to_string()
    }

    fn load(&self, store: &MediaStore) -> Vec<ListItem> {
        store
            .movies()
            .into_iter()
            .map(|movie| ListItem::new(&movie.name, &movie.url))
            .collect()
    }
}

pub struct ShowList;

impl Screen for ShowList {
    fn list_type(&self) -> ListType {
        ListType::Shows
    }

    fn title(&self, _store: &MediaStore) -> String {
        "TV Shows".to_string()
    }

    fn load(&self, store: &MediaStore) -> Vec<ListItem> {
        store
            .shows()
            .into_iter()
            .map(|show| ListItem::new(&show.name, Route::Episodes { show_id: show.id }.to_path()))
            .collect()
    }
}

pub struct EpisodeList {
    pub show_id: u64,
}

impl Screen for EpisodeList {
    fn list_type(&self) -> ListType {
        ListType::Episodes
    }

    fn title(&self, store: &MediaStore) -> String {
        store
            .show(self.show_id)
            .map(|show| show.name.clone())
            .unwrap_or_else(|| format!("Show {}", self.show_id))
    }

    fn load(&self, store: &MediaStore) -> Vec<ListItem> {
        store
            .episodes(self.show_id)
            .into_iter()
            .map(|episode| {
                let item = ListItem::new(episode.label(), episode.target_url());
                match (episode.season, episode.number) {
                    (Some(season), Some(number)) => item.with_sort_keys(season, number),
                    _ => item,
                }
            })
            .collect()
    }
}

/// The screen that renders a route.
pub fn screen_for(route: Route) -> Box<dyn Screen> {
    match route {
        Route::Main => Box::new(MainMenu),
        Route::Movies => Box::new(MovieList),
        Route::Shows => Box::new(ShowList),
        Route::Episodes { show_id } => Box::new(EpisodeList { show_id }),
    }
}
