//! Optional RON settings file for the page host.
//!
//! Every field has a default, so a partial file only overrides what it names.
//! A missing file is normal.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use engine_logging::LogDestination;
use log::LevelFilter;
use notebook_engine::{ClientSettings, EngineSettings, TimerSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILENAME: &str = "notebook_app.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub base_url: String,
    pub connect_timeout_ms: u64,
    /// No timeout unless set; a hung generate call keeps the page in flight.
    pub request_timeout_ms: Option<u64>,
    pub progress_interval_ms: u64,
    pub settle_delay_ms: u64,
    pub log_file: Option<PathBuf>,
    pub log_to_terminal: bool,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        let client = ClientSettings::default();
        let timers = TimerSettings::default();
        Self {
            base_url: client.base_url,
            connect_timeout_ms: millis(client.connect_timeout),
            request_timeout_ms: client.request_timeout.map(millis),
            progress_interval_ms: millis(timers.progress_interval),
            settle_delay_ms: millis(timers.settle_delay),
            log_file: Some(PathBuf::from("./notebook_app.log")),
            log_to_terminal: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path`, or `notebook_app.ron` in the working directory when no
    /// path is given. A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILENAME));
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            client: ClientSettings {
                base_url: self.base_url.clone(),
                connect_timeout: Duration::from_millis(self.connect_timeout_ms),
                request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            },
            timers: TimerSettings {
                progress_interval: Duration::from_millis(self.progress_interval_ms),
                settle_delay: Duration::from_millis(self.settle_delay_ms),
            },
        }
    }

    /// `None` when logging is switched off entirely.
    pub fn log_destination(&self) -> Option<LogDestination> {
        match (&self.log_file, self.log_to_terminal) {
            (Some(path), true) => Some(LogDestination::Both(path.clone())),
            (Some(path), false) => Some(LogDestination::File(path.clone())),
            (None, true) => Some(LogDestination::Terminal),
            (None, false) => None,
        }
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
