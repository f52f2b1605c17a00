//! # Media Store
//!
//! In-memory tables for the catalog, keyed by primary key:
//!
//! ```text
//! MediaStore
//! ├── movies:   id → Movie
//! ├── shows:    id → Show
//! └── episodes: id → Episode   (queried per show, ordered season → number)
//! ```
//!
//! The store is only ever replaced wholesale from a freshly fetched (or
//! cached) catalog. Screens read from it when they load their lists.

use std::collections::BTreeMap;

use chrono::Utc;

use super::types::{Episode, MediaInfo, Movie, Show};

#[derive(Debug, Default)]
pub struct MediaStore {
    movies: BTreeMap<u64, Movie>,
    shows: BTreeMap<u64, Show>,
    episodes: BTreeMap<u64, Episode>,
    refreshed_at: Option<i64>,
}

impl MediaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a catalog, stamped with the given refresh time.
    pub fn from_media(media: MediaInfo, refreshed_at: i64) -> Self {
        let mut store = Self::new();
        store.replace_all(media);
        store.refreshed_at = Some(refreshed_at);
        store
    }

    /// Drops every row, then inserts the new catalog. Rows sharing an id
    /// collapse to the last one.
    pub fn replace_all(&mut self, media: MediaInfo) {
        self.movies.clear();
        self.shows.clear();
        self.episodes.clear();

        self.movies
            .extend(media.movies.into_iter().map(|m| (m.id, m)));
        self.shows.extend(media.shows.into_iter().map(|s| (s.id, s)));
        self.episodes
            .extend(media.episodes.into_iter().map(|e| (e.id, e)));
        self.refreshed_at = Some(Utc::now().timestamp());
    }

    pub fn movies(&self) -> Vec<&Movie> {
        self.movies.values().collect()
    }

    pub fn shows(&self) -> Vec<&Show> {
        self.shows.values().collect()
    }

    pub fn show(&self, id: u64) -> Option<&Show> {
        self.shows.get(&id)
    }

    /// Episodes of one show, ordered by season, then number, then id.
    /// Missing season/number sort first.
    pub fn episodes(&self, show_id: u64) -> Vec<&Episode> {
        let mut episodes: Vec<&Episode> = self
            .episodes
            .values()
            .filter(|e| e.show == show_id)
            .collect();
        episodes.sort_by_key(|e| (e.season, e.number, e.id));
        episodes
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty() && self.episodes.is_empty()
    }

    /// Unix timestamp of the last `replace_all`, if any.
    pub fn refreshed_at(&self) -> Option<i64> {
        self.refreshed_at
    }

    /// Snapshot of the tables as a catalog document (for the on-disk cache).
    pub fn to_media_info(&self) -> MediaInfo {
        MediaInfo {
            movies: self.movies.values().cloned().collect(),
            shows: self.shows.values().cloned().collect(),
            episodes: self.episodes.values().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_media;

    #[test]
    fn test_new_store_is_empty() {
        let store = MediaStore::new();
        assert!(store.is_empty());
        assert!(store.refreshed_at().is_none());
    }

    #[test]
    fn test_replace_all_drops_previous_rows() {
        let mut store = MediaStore::new();
        store.replace_all(sample_media());
        assert_eq!(store.movies().len(), 2);

        store.replace_all(MediaInfo {
            shows: vec![Show {
                id: 9,
                name: "News".to_string(),
            }],
            ..Default::default()
        });
        assert!(store.movies().is_empty());
        assert!(store.episodes(1).is_empty());
        assert_eq!(store.shows().len(), 1);
        assert!(store.refreshed_at().is_some());
    }

    #[test]
    fn test_duplicate_ids_keep_last_row() {
        let mut store = MediaStore::new();
        store.replace_all(MediaInfo {
            movies: vec![
                Movie {
                    id: 1,
                    name: "Old".to_string(),
                    url: "/old".to_string(),
                },
                Movie {
                    id: 1,
                    name: "New".to_string(),
                    url: "/new".to_string(),
                },
            ],
            ..Default::default()
        });
        let movies = store.movies();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].name, "New");
    }

    #[test]
    fn test_episodes_filtered_and_ordered() {
        let store = MediaStore::from_media(sample_media(), 0);
        let episodes = store.episodes(1);
        let keys: Vec<(Option<u32>, Option<u32>)> =
            episodes.iter().map(|e| (e.season, e.number)).collect();
        assert_eq!(
            keys,
            vec![(Some(1), Some(1)), (Some(1), Some(2)), (Some(2), Some(1))]
        );
        assert!(episodes.iter().all(|e| e.show == 1));
        assert_eq!(store.episodes(2).len(), 1);
        assert!(store.episodes(42).is_empty());
    }

    #[test]
    fn test_to_media_info_round_trips_rows() {
        let store = MediaStore::from_media(sample_media(), 10);
        let again = MediaStore::from_media(store.to_media_info(), 10);
        assert_eq!(again.movies().len(), store.movies().len());
        assert_eq!(again.shows().len(), store.shows().len());
        assert_eq!(again.episodes(1).len(), store.episodes(1).len());
    }
}
