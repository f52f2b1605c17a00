use telly::catalog::{CatalogError, CatalogSource, HttpCatalog, MediaStore};
use telly::core::action::{Action, Effect};
use telly::core::dispatch::Dispatcher;
use telly::core::navigation::ListType;
use telly::core::router::{HistoryRouter, Route, Router};
use telly::core::state::{App, CatalogStatus};
use telly::playback::{PlaybackError, Player};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

const MEDIA_INFO: &str = r#"{
  "movies": [
    {"id": 1, "name": "Alien", "url": "/movies/alien.mp4"},
    {"id": 2, "name": "Brazil", "url": "/movies/brazil.mp4"}
  ],
  "shows": [
    {"id": 7, "name": "Firefly"}
  ],
  "episodes": [
    {"id": 71, "name": "Serenity", "number": 1, "season": 1, "show": 7, "url": "/tv/firefly/1x1.mkv"},
    {"id": 72, "number": 2, "season": 1, "show": 7}
  ]
}"#;

async fn mock_media_info(response: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/media_info"))
        .respond_with(response)
        .mount(&mock_server)
        .await;
    mock_server
}

/// Records play requests, nothing else.
#[derive(Default)]
struct NullPlayer {
    played: Vec<String>,
}

impl Player for NullPlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        self.played.push(url.to_string());
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn is_playing(&self) -> bool {
        false
    }

    fn request_fullscreen(&mut self) {}
}

// ============================================================================
// HttpCatalog Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_parses_media_info() {
    let mock_server = mock_media_info(
        ResponseTemplate::new(200).set_body_raw(MEDIA_INFO, "application/json"),
    )
    .await;

    let catalog = HttpCatalog::new(mock_server.uri());
    let media = catalog.fetch().await.expect("catalog should parse");

    assert_eq!(media.movies.len(), 2);
    assert_eq!(media.shows[0].name, "Firefly");
    assert_eq!(media.episodes.len(), 2);
    assert_eq!(media.episodes[1].name, None);
    assert_eq!(media.episodes[1].url, None);
}

#[tokio::test]
async fn test_fetch_tolerates_trailing_slash_in_source() {
    let mock_server = mock_media_info(
        ResponseTemplate::new(200).set_body_raw(r#"{"movies": []}"#, "application/json"),
    )
    .await;

    let catalog = HttpCatalog::new(format!("{}/", mock_server.uri()));
    let media = catalog.fetch().await.unwrap();
    assert!(media.movies.is_empty());
    assert!(media.shows.is_empty());
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server =
        mock_media_info(ResponseTemplate::new(500).set_body_string("database is locked")).await;

    let catalog = HttpCatalog::new(mock_server.uri());
    match catalog.fetch().await {
        Err(CatalogError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "database is locked");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_malformed_json() {
    let mock_server =
        mock_media_info(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let catalog = HttpCatalog::new(mock_server.uri());
    assert!(matches!(catalog.fetch().await, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_unreachable_server() {
    // Start a server to get a free port, then shut it down
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let catalog = HttpCatalog::new(uri);
    assert!(matches!(catalog.fetch().await, Err(CatalogError::Network(_))));
}

// ============================================================================
// Fetch → Dispatcher Flow
// ============================================================================

#[tokio::test]
async fn test_fetched_catalog_drives_navigation() {
    let mock_server = mock_media_info(
        ResponseTemplate::new(200).set_body_raw(MEDIA_INFO, "application/json"),
    )
    .await;
    let media = HttpCatalog::new(mock_server.uri()).fetch().await.unwrap();

    let mut app = App::new(MediaStore::new());
    let mut dispatcher = Dispatcher::new(NullPlayer::default(), HistoryRouter::new());
    dispatcher.start(&mut app);

    let effect = dispatcher.update(&mut app, Action::CatalogLoaded(media));
    assert_eq!(effect, Effect::SaveCatalog);
    assert_eq!(app.catalog, CatalogStatus::Ready);

    // Main menu → TV Shows → Firefly → second episode
    for key in ["ArrowDown", "Enter", "Enter", "ArrowDown", "Enter"] {
        dispatcher.update(&mut app, Action::Key(key.to_string()));
    }

    assert_eq!(app.navigation.list_type(), ListType::Episodes);
    assert_eq!(dispatcher.router().current(), Route::Episodes { show_id: 7 });
    assert_eq!(dispatcher.player().played, vec!["/episodes/72"]);
    assert!(app.playback.is_active());
}

#[tokio::test]
async fn test_failed_fetch_keeps_cached_lists() {
    let mock_server = mock_media_info(ResponseTemplate::new(503)).await;
    let error = HttpCatalog::new(mock_server.uri())
        .fetch()
        .await
        .unwrap_err();

    let cached: telly::catalog::MediaInfo = serde_json::from_str(MEDIA_INFO).unwrap();
    let mut app = App::new(MediaStore::from_media(cached, 1_700_000_000));
    let mut dispatcher = Dispatcher::new(NullPlayer::default(), HistoryRouter::new());
    dispatcher.start(&mut app);
    dispatcher.update(&mut app, Action::Key("Enter".to_string()));
    let revision = app.navigation.revision();

    let effect = dispatcher.update(&mut app, Action::CatalogFailed(error.to_string()));
    assert_eq!(effect, Effect::None);
    assert!(matches!(app.catalog, CatalogStatus::Unavailable(_)));
    assert_eq!(app.navigation.revision(), revision);
    assert_eq!(app.navigation.list_type(), ListType::Movies);
    assert_eq!(app.navigation.items().len(), 2);
}
