use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::navigation::ListType;
use crate::tui::component::Component;

/// Bottom line of key hints for the current list.
pub struct HelpBar {
    pub list_type: ListType,
}

impl HelpBar {
    pub fn new(list_type: ListType) -> Self {
        Self { list_type }
    }

    pub fn hints(&self) -> &'static str {
        if self.list_type.is_playable() {
            "↑/w ↓/s move · Enter play · p/o resume/pause · Esc back · q quit"
        } else {
            "↑/w ↓/s move · Enter open · Esc back · q quit"
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.hints(),
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(line, area);
    }
}
