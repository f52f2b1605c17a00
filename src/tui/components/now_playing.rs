//! # NowPlaying Component
//!
//! Centered overlay drawn on top of the list while the player holds the
//! screen. Shows what is playing, whether it is paused, and the keys that
//! control it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::playback::PlaybackState;
use crate::tui::component::Component;

pub struct NowPlaying<'a> {
    pub playback: &'a PlaybackState,
}

impl<'a> NowPlaying<'a> {
    pub fn new(playback: &'a PlaybackState) -> Self {
        Self { playback }
    }
}

/// A rect of the given size centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}

impl Component for NowPlaying<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (state, color) = if self.playback.is_playing {
            ("Playing", Color::Green)
        } else {
            ("Paused", Color::Yellow)
        };

        let lines = vec![
            Line::from(Span::styled(
                state,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(self.playback.source_url.as_str()),
            Line::default(),
            Line::from(Span::styled(
                "p play · o pause · Esc stop",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let width = area.width.saturating_mul(3) / 5;
        let popup = centered_rect(area, width.max(30), 6);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(" Now Playing ")
                    .border_style(Style::default().fg(color)),
            );

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}
