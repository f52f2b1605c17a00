use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key by its dispatcher name (`ArrowUp`, `Enter`, `p`, ...)
    Key(String),
    /// `q` or Ctrl+C
    Quit,
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            log::warn!("Terminal poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(Event::Key(key_event)) => map_key(key_event),
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Terminal read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Translate a crossterm key into a dispatcher key name.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Release/repeat events arrive when keyboard enhancement is on
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    let plain = matches!(key_event.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT);
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        // Ctrl/Alt chords are not navigation keys
        (_, KeyCode::Char(_)) if !plain => None,
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up) => Some(TuiEvent::Key("ArrowUp".to_string())),
        (_, KeyCode::Down) => Some(TuiEvent::Key("ArrowDown".to_string())),
        (_, KeyCode::Enter) => Some(TuiEvent::Key("Enter".to_string())),
        (_, KeyCode::Esc) => Some(TuiEvent::Key("Escape".to_string())),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c.to_string())),
        _ => None,
    }
}
