//! # MenuList Component
//!
//! The selectable list for the current screen. The selected entry is
//! highlighted and kept in view; an empty list shows why it is empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem as ListRow, ListState, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::navigation::ListItem;
use crate::core::state::CatalogStatus;
use crate::tui::component::Component;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Persists the scroll offset between frames.
#[derive(Default)]
pub struct MenuListState {
    pub list_state: ListState,
}

pub struct MenuList<'a> {
    pub items: &'a [ListItem],
    pub selected: usize,
    pub catalog: &'a CatalogStatus,
    pub state: &'a mut MenuListState,
}

impl<'a> MenuList<'a> {
    pub fn new(
        items: &'a [ListItem],
        selected: usize,
        catalog: &'a CatalogStatus,
        state: &'a mut MenuListState,
    ) -> Self {
        Self {
            items,
            selected,
            catalog,
            state,
        }
    }
}

/// What to show in place of an empty list.
pub fn empty_message(catalog: &CatalogStatus) -> &'static str {
    match catalog {
        CatalogStatus::Loading => "Loading catalog…",
        CatalogStatus::Unavailable(_) => "Catalog unavailable",
        CatalogStatus::Ready => "Nothing here",
    }
}

/// Cut `text` to at most `max_width` display columns, adding an ellipsis
/// when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

impl Component for MenuList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_style(Style::default().fg(Color::DarkGray));

        if self.items.is_empty() {
            let paragraph = Paragraph::new(empty_message(self.catalog))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let label_width = (area.width as usize)
            .saturating_sub(2)
            .saturating_sub(HIGHLIGHT_SYMBOL.width());
        let rows: Vec<ListRow> = self
            .items
            .iter()
            .map(|item| ListRow::new(Line::from(truncate_to_width(&item.label, label_width))))
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::REVERSED | Modifier::BOLD),
            )
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        self.state.list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
