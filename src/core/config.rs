//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.telly/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Input;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TellyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub media_source: Option<String>,
    pub input: Option<Input>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
    pub pause_key: Option<String>,
    pub quit_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CacheConfig {
    pub enabled: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MEDIA_SOURCE: &str = "http://media";
pub const DEFAULT_PLAYER_COMMAND: &str = "omxplayer";
pub const DEFAULT_PAUSE_KEY: &str = "p";
pub const DEFAULT_QUIT_KEY: &str = "q";
pub const DEFAULT_REMOTE_COMMAND: &str = "cec-client";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub media_source: String,
    pub input: Input,
    pub player_command: String,
    pub player_args: Vec<String>,
    pub pause_key: String,
    pub quit_key: String,
    pub remote_command: String,
    pub remote_args: Vec<String>,
    /// `None` when caching is disabled or there is no home directory.
    pub cache_path: Option<PathBuf>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub media_source: Option<String>,
    pub input: Option<Input>,
    pub player: Option<String>,
    pub no_cache: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.telly/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".telly").join("config.toml"))
}

/// Load config from `~/.telly/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TellyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TellyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TellyConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TellyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(TellyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TellyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Telly Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# media_source = "http://media"      # Or set TELLY_MEDIA_SOURCE env var
# input = "keyboard"                 # "keyboard" or "cec"

# [player]
# command = "omxplayer"              # Or set TELLY_PLAYER env var
# args = ["-b"]
# pause_key = "p"                    # Written to the player's stdin to toggle pause
# quit_key = "q"                     # Written to the player's stdin to stop

# [remote]
# command = "cec-client"
# args = []

# [cache]
# enabled = true                     # Keep the last catalog at ~/.telly/catalog.json
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TellyConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Media source: CLI → env → config → default
    let media_source = cli
        .media_source
        .clone()
        .or_else(|| std::env::var("TELLY_MEDIA_SOURCE").ok())
        .or_else(|| config.general.media_source.clone())
        .unwrap_or_else(|| DEFAULT_MEDIA_SOURCE.to_string());

    let input = cli.input.or(config.general.input).unwrap_or_default();

    // Player command: CLI → env → config → default
    let player_command = cli
        .player
        .clone()
        .or_else(|| std::env::var("TELLY_PLAYER").ok())
        .or_else(|| config.player.command.clone())
        .unwrap_or_else(|| DEFAULT_PLAYER_COMMAND.to_string());

    let cache_enabled = !cli.no_cache && config.cache.enabled.unwrap_or(true);
    let cache_path = if cache_enabled {
        crate::catalog::cache::default_cache_path()
    } else {
        None
    };

    ResolvedConfig {
        media_source,
        input,
        player_command,
        player_args: config.player.args.clone().unwrap_or_default(),
        pause_key: config
            .player
            .pause_key
            .clone()
            .unwrap_or_else(|| DEFAULT_PAUSE_KEY.to_string()),
        quit_key: config
            .player
            .quit_key
            .clone()
            .unwrap_or_else(|| DEFAULT_QUIT_KEY.to_string()),
        remote_command: config
            .remote
            .command
            .clone()
            .unwrap_or_else(|| DEFAULT_REMOTE_COMMAND.to_string()),
        remote_args: config.remote.args.clone().unwrap_or_default(),
        cache_path,
    }
}
