//! Telly library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod core;
pub mod playback;
pub mod remote;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Where input events come from. The keyboard is always read; `Cec` also
/// listens to an HDMI-CEC remote through the helper process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    #[default]
    Keyboard,
    Cec,
}

impl Input {
    pub fn label(self) -> &'static str {
        match self {
            Input::Keyboard => "keyboard",
            Input::Cec => "cec",
        }
    }
}
