//! External player process.
//!
//! Each `play` spawns the configured command with the media url appended.
//! The player is driven through its stdin with single-key commands, the
//! way omxplayer (and most console players) accept them:
//!
//! - pause key (default `p`) toggles pause
//! - quit key (default `q`) stops and exits
//!
//! Relative urls from the catalog are joined onto the media source.

use std::io::Write;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::player::{PlaybackError, Player};

/// How long a stopped player gets to honour the quit key before it is
/// killed.
const QUIT_GRACE: Duration = Duration::from_millis(200);

struct Session {
    child: Child,
    stdin: Option<ChildStdin>,
    paused: bool,
    source: String,
}

/// A player that was told to quit and has not been reaped yet.
struct Stopping {
    child: Child,
    deadline: Instant,
    killed: bool,
}

pub struct ExternalPlayer {
    command: String,
    args: Vec<String>,
    media_source: String,
    pause_key: String,
    quit_key: String,
    session: Option<Session>,
    stopping: Vec<Stopping>,
}

impl ExternalPlayer {
    pub fn new(command: impl Into<String>, args: Vec<String>, media_source: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args,
            media_source: media_source.into(),
            pause_key: "p".to_string(),
            quit_key: "q".to_string(),
            session: None,
            stopping: Vec::new(),
        }
    }

    pub fn with_keys(mut self, pause_key: impl Into<String>, quit_key: impl Into<String>) -> Self {
        self.pause_key = pause_key.into();
        self.quit_key = quit_key.into();
        self
    }

    fn send_key(session: &mut Session, key: &str) -> Result<(), PlaybackError> {
        let stdin = session.stdin.as_mut().ok_or_else(|| {
            PlaybackError::Control(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "player stdin closed",
            ))
        })?;
        stdin
            .write_all(key.as_bytes())
            .and_then(|_| stdin.flush())
            .map_err(PlaybackError::Control)
    }

    /// Reap stopped players that have exited, killing any past their grace
    /// period. Never waits.
    fn reap_stopping(&mut self) {
        let now = Instant::now();
        self.stopping.retain_mut(|stopping| {
            match stopping.child.try_wait() {
                Ok(Some(status)) => {
                    info!("[STOP] Player exited with {}", status);
                    return false;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to poll stopping player: {}", e);
                    return false;
                }
            }
            if !stopping.killed && now >= stopping.deadline {
                info!("[STOP] Killing player (PID: {})", stopping.child.id());
                if let Err(e) = stopping.child.kill() {
                    debug!("Kill failed (already exited?): {}", e);
                }
                stopping.killed = true;
            }
            true
        });
    }
}

/// Joins a catalog url onto the media source. Absolute urls pass through.
pub fn resolve_source(media_source: &str, url: &str) -> String {
    if url.contains("://") {
        return url.to_string();
    }
    let base = media_source.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{base}{url}")
    } else {
        format!("{base}/{url}")
    }
}

impl Player for ExternalPlayer {
    fn play(&mut self, url: &str) -> Result<(), PlaybackError> {
        self.stop()?;

        let source = resolve_source(&self.media_source, url);
        info!("[PLAY] {} {:?} {}", self.command, self.args, source);

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .arg(&source)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PlaybackError::Spawn {
                command: self.command.clone(),
                source: e,
            })?;

        info!("[PLAY] Player launched (PID: {})", child.id());
        let stdin = child.stdin.take();
        self.session = Some(Session {
            child,
            stdin,
            paused: false,
            source,
        });
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        if let Some(session) = self.session.as_mut()
            && !session.paused
        {
            Self::send_key(session, &self.pause_key)?;
            session.paused = true;
            debug!("Paused {}", session.source);
        }
        Ok(())
    }

    fn resume(&mut self) -> Result<(), PlaybackError> {
        if let Some(session) = self.session.as_mut()
            && session.paused
        {
            Self::send_key(session, &self.pause_key)?;
            session.paused = false;
            debug!("Resumed {}", session.source);
        }
        Ok(())
    }

    /// Sends the quit key and returns at once. The process is reaped, or
    /// killed after [`QUIT_GRACE`], by later `poll_finished` calls.
    fn stop(&mut self) -> Result<(), PlaybackError> {
        let Some(mut session) = self.session.take() else {
            return Ok(());
        };

        // The process may already be gone; a failed quit key is fine.
        let _ = Self::send_key(&mut session, &self.quit_key);
        drop(session.stdin.take());
        debug!("[STOP] Quit sent to {}", session.source);

        self.stopping.push(Stopping {
            child: session.child,
            deadline: Instant::now() + QUIT_GRACE,
            killed: false,
        });
        self.reap_stopping();
        Ok(())
    }

    fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.paused)
    }

    fn request_fullscreen(&mut self) {
        // Console players start fullscreen
        debug!("Fullscreen requested");
    }

    fn poll_finished(&mut self) -> bool {
        self.reap_stopping();
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        match session.child.try_wait() {
            Ok(Some(status)) => {
                info!("Player finished ({}) for {}", status, session.source);
                self.session = None;
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to poll player: {}", e);
                false
            }
        }
    }
}

impl Drop for ExternalPlayer {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("Failed to stop player on shutdown: {}", e);
        }
        for mut stopping in self.stopping.drain(..) {
            let _ = stopping.child.kill();
            let _ = stopping.child.wait();
        }
    }
}
