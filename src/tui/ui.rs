use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, MenuList, NowPlaying, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.screen_title.clone(), app.status_message.clone()).render(frame, title_area);

    MenuList::new(
        app.navigation.items(),
        app.navigation.selected(),
        &app.catalog,
        &mut tui.menu_list,
    )
    .render(frame, main_area);

    HelpBar::new(app.navigation.list_type()).render(frame, help_area);

    if app.playback.is_active() {
        NowPlaying::new(&app.playback).render(frame, main_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::playback::PlaybackState;
    use crate::core::router::Route;
    use crate::core::state::CatalogStatus;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal
            .draw(|f| {
                draw_ui(f, app, &mut tui);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_main_menu() {
        let mut app = test_app();
        app.show(Route::Main);
        let text = render(&app);
        assert!(text.contains("Telly | Home"));
        assert!(text.contains("▶ Movies"));
        assert!(text.contains("TV Shows"));
        assert!(text.contains("Enter open"));
    }

    #[test]
    fn test_draw_episode_list() {
        let mut app = test_app();
        app.show(Route::Episodes { show_id: 1 });
        let text = render(&app);
        assert!(text.contains("Firefly"));
        assert!(text.contains("Season 1, Ep 1 - Pilot"));
        assert!(text.contains("Enter play"));
    }

    #[test]
    fn test_draw_overlay_while_playing() {
        let mut app = test_app();
        app.show(Route::Movies);
        app.playback = PlaybackState::started("/movies/alien.mp4");
        let text = render(&app);
        assert!(text.contains("Now Playing"));
    }

    #[test]
    fn test_no_overlay_when_idle() {
        let mut app = test_app();
        app.show(Route::Movies);
        let text = render(&app);
        assert!(!text.contains("Now Playing"));
    }

    #[test]
    fn test_draw_unavailable_catalog() {
        let mut app = App::new(crate::catalog::MediaStore::new());
        app.catalog = CatalogStatus::Unavailable("connection refused".to_string());
        app.show(Route::Movies);
        let text = render(&app);
        assert!(text.contains("Catalog unavailable"));
    }
}
