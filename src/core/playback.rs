/// What the player is doing, as far as the UI is concerned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub source_url: String,
    pub is_fullscreen: bool,
    pub is_playing: bool,
}

impl PlaybackState {
    pub fn started(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            is_fullscreen: true,
            is_playing: true,
        }
    }

    /// Playing, or paused but still holding the screen.
    pub fn is_active(&self) -> bool {
        self.is_playing || self.is_fullscreen
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        assert!(!PlaybackState::default().is_active());
    }

    #[test]
    fn test_paused_fullscreen_is_active() {
        let mut state = PlaybackState::started("/a");
        state.is_playing = false;
        assert!(state.is_active());
        state.reset();
        assert_eq!(state, PlaybackState::default());
    }
}
