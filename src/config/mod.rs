//! User configuration.
//!
//! Stored as TOML at `$SCRUBBER_CONFIG` or, failing that, in the platform
//! config directory (`~/.config/scrubber/config.toml` on Linux). A missing
//! file means defaults; missing keys within a section fall back to their
//! defaults too.
//!
//! ```toml
//! [playback]
//! playback_rate = 1.0
//! autoplay = true
//! start_muted = true
//! seek_step_secs = 5.0
//!
//! [tracker]
//! base_interval_ms = 33
//! min_interval_ms = 8
//! max_interval_ms = 250
//!
//! [preview]
//! width = 24.0
//! aspect_ratio = 2.0
//!
//! [[sources]]
//! source = "clip.webm"
//! mime_type = "video/webm"
//! ```

mod error;

pub use error::ConfigError;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::{pick_source, HostError};
use crate::scrub::{Cadence, ControllerSettings, MediaSource, PlaybackRate, PreviewStyle};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SCRUBBER_CONFIG";

const APP_DIR: &str = "scrubber";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub playback_rate: f64,
    /// Start playing once the media is ready
    pub autoplay: bool,
    pub start_muted: bool,
    /// Step for keyboard seeking
    pub seek_step_secs: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            playback_rate: 1.0,
            autoplay: true,
            start_muted: true,
            seek_step_secs: 5.0,
        }
    }
}

/// Progress refresh cadence at normal speed and its bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: 33,
            min_interval_ms: 8,
            max_interval_ms: 250,
        }
    }
}

/// Preview box size in terminal cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub width: f64,
    pub aspect_ratio: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 24.0,
            aspect_ratio: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub tracker: TrackerConfig,
    pub preview: PreviewConfig,
    /// Candidate sources, in order of preference
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<MediaSource>,
}

impl Config {
    /// Resolve the config file path.
    ///
    /// # Errors
    /// `ConfigError::NoConfigDir` if neither the override nor a platform
    /// config directory is available.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// First configured source the host can play.
    ///
    /// # Returns
    /// `Ok(None)` when no sources are configured.
    ///
    /// # Errors
    /// `HostError::NoSupportedSource` if sources are configured but none is
    /// supported.
    pub fn select_source(&self) -> Result<Option<&MediaSource>, HostError> {
        if self.sources.is_empty() {
            return Ok(None);
        }
        pick_source(&self.sources).map(Some)
    }

    pub fn cadence(&self) -> Cadence {
        Cadence {
            base: Duration::from_millis(self.tracker.base_interval_ms),
            min: Duration::from_millis(self.tracker.min_interval_ms),
            max: Duration::from_millis(self.tracker.max_interval_ms),
        }
    }

    /// Controller settings described by this config.
    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            cadence: self.cadence(),
            playback_rate: PlaybackRate::new(self.playback.playback_rate),
            preview: PreviewStyle {
                width: self.preview.width,
                aspect_ratio: self.preview.aspect_ratio,
            },
            autoplay: self.playback.autoplay,
            start_muted: self.playback.start_muted,
            seek_step_secs: self.playback.seek_step_secs.abs(),
        }
    }
}
