use serde::{Deserialize, Serialize};

/// A movie as published by the media server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: u64,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: u64,
    pub name: String,
}

/// One episode of a show. Everything except the id and the owning show is
/// optional on the server side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub season: Option<u32>,
    pub show: u64,
    #[serde(default)]
    pub url: Option<String>,
}

impl Episode {
    /// Human label, e.g. `Season 2, Ep 5 - Pilot`.
    pub fn label(&self) -> String {
        let season = self.season.map_or_else(|| "?".to_string(), |s| s.to_string());
        let number = self.number.map_or_else(|| "?".to_string(), |n| n.to_string());
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("Season {season}, Ep {number} - {name}"),
            _ => format!("Season {season}, Ep {number}"),
        }
    }

    /// Playback target. Falls back to the server's per-id episode path.
    pub fn target_url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| format!("/episodes/{}", self.id))
    }
}

/// Body of `GET /media_info`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaInfo {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(name: Option<&str>, season: Option<u32>, number: Option<u32>) -> Episode {
        Episode {
            id: 7,
            name: name.map(str::to_string),
            number,
            season,
            show: 1,
            url: None,
        }
    }

    #[test]
    fn test_episode_label_with_name() {
        let ep = episode(Some("Pilot"), Some(1), Some(1));
        assert_eq!(ep.label(), "Season 1, Ep 1 - Pilot");
    }

    #[test]
    fn test_episode_label_without_name_or_numbers() {
        assert_eq!(episode(None, Some(3), Some(9)).label(), "Season 3, Ep 9");
        assert_eq!(episode(Some("  "), None, None).label(), "Season ?, Ep ?");
    }

    #[test]
    fn test_episode_target_url_fallback() {
        let mut ep = episode(None, Some(1), Some(2));
        assert_eq!(ep.target_url(), "/episodes/7");
        ep.url = Some("/tv/show/s01e02.mkv".to_string());
        assert_eq!(ep.target_url(), "/tv/show/s01e02.mkv");
    }

    #[test]
    fn test_media_info_parses_sparse_json() {
        let json = r#"{
            "movies": [{"id": 1, "name": "Alien", "url": "/movies/alien.mp4"}],
            "episodes": [{"id": 4, "show": 2, "season": 1, "number": 2, "name": null}]
        }"#;
        let info: MediaInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.movies.len(), 1);
        assert!(info.shows.is_empty());
        assert_eq!(info.episodes[0].name, None);
        assert_eq!(info.episodes[0].url, None);
    }
}
