use std::fmt;
use std::io;

/// Errors raised by a playback collaborator.
#[derive(Debug)]
pub enum PlaybackError {
    /// The player process could not be started.
    Spawn { command: String, source: io::Error },
    /// The control channel to a running player failed.
    Control(io::Error),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Spawn { command, source } => {
                write!(f, "failed to start player '{command}': {source}")
            }
            PlaybackError::Control(e) => write!(f, "player control error: {e}"),
        }
    }
}

impl std::error::Error for PlaybackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaybackError::Spawn { source, .. } => Some(source),
            PlaybackError::Control(e) => Some(e),
        }
    }
}

/// Something that can play a media url.
///
/// The dispatcher only issues requests; timing and decoding are the
/// player's business.
pub trait Player {
    /// Start playing `url`, replacing whatever was playing.
    fn play(&mut self, url: &str) -> Result<(), PlaybackError>;

    fn pause(&mut self) -> Result<(), PlaybackError>;

    fn resume(&mut self) -> Result<(), PlaybackError>;

    /// Stop playback. Stopping when nothing plays is not an error.
    fn stop(&mut self) -> Result<(), PlaybackError>;

    /// True while media is playing and not paused.
    fn is_playing(&self) -> bool;

    fn request_fullscreen(&mut self);

    /// Returns true once if playback finished on its own since the last
    /// call (e.g. the player process exited).
    fn poll_finished(&mut self) -> bool {
        false
    }
}
