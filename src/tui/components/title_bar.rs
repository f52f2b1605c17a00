//! # TitleBar Component
//!
//! Top status bar: app name, the screen being browsed and the latest
//! status message.
//!
//! Purely presentational. It receives all data as props and keeps no state,
//! so it is trivial to test:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("TV Shows".to_string(), "Catalog: 3 movies".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! Formatting:
//!
//! 1. **Status message**: `"Telly | TV Shows | Catalog: 3 movies"`
//! 2. **No status**: `"Telly | TV Shows"`
//! 3. **No screen yet**: `"Telly"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Title of the loaded screen (e.g. "Movies", a show name)
    pub screen_title: String,
    /// Status message (e.g. "Catalog unavailable: ...")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String) -> Self {
        Self {
            screen_title,
            status_message,
        }
    }

    fn text(&self) -> String {
        let mut text = String::from("Telly");
        for part in [&self.screen_title, &self.status_message] {
            if !part.is_empty() {
                text.push_str(" | ");
                text.push_str(part);
            }
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(title_bar: &mut TitleBar) -> String {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
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
    fn test_title_bar_with_status_message() {
        let mut title_bar = TitleBar::new("TV Shows".to_string(), "Loading catalog".to_string());
        let text = render_text(&mut title_bar);
        assert!(text.contains("Telly | TV Shows | Loading catalog"));
    }

    #[test]
    fn test_title_bar_without_status() {
        let mut title_bar = TitleBar::new("Movies".to_string(), String::new());
        let text = render_text(&mut title_bar);
        assert!(text.contains("Telly | Movies"));
        assert_eq!(text.matches('|').count(), 1);
    }

    #[test]
    fn test_title_bar_before_first_screen() {
        let title_bar = TitleBar::new(String::new(), String::new());
        assert_eq!(title_bar.text(), "Telly");
    }
}
