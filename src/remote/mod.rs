//! # Remote-Control Input
//!
//! HDMI-CEC remotes are read through a helper process (`cec-client` by
//! default). It prints one line per bus event; key presses look like:
//!
//! ```text
//! TRAFFIC: [   4815]  >> 01:44:00
//! key pressed: select (0)
//! key pressed: down (2) current(ff) duration(0)
//! ```
//!
//! A reader thread parses each line independently and forwards the key name
//! to the event loop as [`Action::Remote`]. Everything else is ignored.

use std::io::{self, BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::LazyLock;
use std::sync::mpsc::Sender;
use std::thread;

use log::{debug, info, warn};
use regex::Regex;

use crate::core::action::Action;

static KEY_PRESSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"key pressed: ([a-z].*?) \(").expect("valid cec key regex")
});

/// Extracts the key name from a helper output line.
pub fn parse_line(line: &str) -> Option<&str> {
    KEY_PRESSED
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A running remote helper. The process is killed when this is dropped.
pub struct RemoteListener {
    command: String,
    child: Child,
}

impl RemoteListener {
    /// Spawn the helper and start forwarding key presses to `tx`.
    pub fn spawn(command: &str, args: &[String], tx: Sender<Action>) -> io::Result<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        info!("Remote helper '{}' started (PID: {})", command, child.id());

        if let Some(stdout) = child.stdout.take() {
            thread::spawn(move || forward_keys(BufReader::new(stdout), tx));
        }

        Ok(Self {
            command: command.to_string(),
            child,
        })
    }
}

impl Drop for RemoteListener {
    fn drop(&mut self) {
        debug!("Stopping remote helper '{}'", self.command);
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// Reads helper output until EOF or until the event loop goes away.
/// Lines that are not valid UTF-8 are decoded lossily; lines that don't
/// carry a key press are skipped. Returns the number of key presses
/// forwarded.
pub fn forward_keys<R: BufRead>(mut reader: R, tx: Sender<Action>) -> usize {
    let mut forwarded = 0usize;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                warn!("Remote helper output unreadable: {}", e);
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        let Some(key) = parse_line(&line) else {
            continue;
        };
        debug!("Remote key: {}", key);
        if tx.send(Action::Remote(key.to_string())).is_err() {
            warn!("Failed to forward remote key: receiver dropped");
            break;
        }
        forwarded += 1;
    }
    info!("Remote helper output closed after {} keys", forwarded);
    forwarded
}
