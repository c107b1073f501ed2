//! Configuration file support.
//!
//! The file is JSON and every field is optional:
//!
//! ```json
//! {
//!   "trace_commands": false,
//!   "discovery_timeout_ms": 1000,
//!   "command_timeout_secs": 600,
//!   "count_timeout_secs": 3600,
//!   "utilities": { "mt": "/usr/bin/mt-st" }
//! }
//! ```

use crate::drive::{DriveOptions, UtilityOverrides};
use crate::error::{Result, RustLtouError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_DIR: &str = "rustltou";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub trace_commands: bool,
    pub discovery_timeout_ms: u64,
    /// Deadline for single commands; none when absent.
    pub command_timeout_secs: Option<u64>,
    /// Deadline for the whole file count walk.
    pub count_timeout_secs: u64,
    pub utilities: UtilityOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_commands: false,
            discovery_timeout_ms: 1000,
            command_timeout_secs: None,
            count_timeout_secs: 3600,
            utilities: UtilityOverrides::default(),
        }
    }
}

impl Config {
    /// `<config dir>/rustltou/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load `path`, or the default location when `None`. A missing default
    /// file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| {
            RustLtouError::config(format!("can not read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
            .map_err(|e| RustLtouError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| RustLtouError::config(e.to_string()))
    }

    pub fn drive_options(&self) -> DriveOptions {
        DriveOptions {
            trace_commands: self.trace_commands,
            discovery_timeout: Duration::from_millis(self.discovery_timeout_ms),
            utilities: self.utilities.clone(),
        }
    }

    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs.map(Duration::from_secs)
    }

    pub fn count_timeout(&self) -> Duration {
        Duration::from_secs(self.count_timeout_secs)
    }
}
