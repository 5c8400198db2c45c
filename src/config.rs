// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configuration file loading.
//!
//! The configuration file is YAML and maps device names to network
//! addresses. It may also override the request timeout and HTTP method:
//!
//! ```yaml
//! devices:
//!   lamp: 192.168.1.20
//!   heater: heater.lan
//! timeout: 5
//! method: get
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::protocol::{HttpConfig, Method};

/// File name of the default configuration file in the home directory.
pub const DEFAULT_FILE_NAME: &str = ".tascli";

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "TASCLI_CONFIG";

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Device name to address table.
    #[serde(default)]
    devices: BTreeMap<String, String>,

    /// Request timeout in seconds.
    #[serde(default)]
    timeout: Option<u64>,

    /// HTTP method used for the command request.
    #[serde(default)]
    method: Option<Method>,
}

impl Config {
    /// Returns the default configuration path, `~/.tascli`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingHomeDir`] if no home directory is known.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_FILE_NAME))
            .ok_or(ConfigError::MissingHomeDir)
    }

    /// Loads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), devices = config.devices.len(), "Loaded configuration");
        Ok(config)
    }

    /// Loads the file at `path` if it exists, otherwise returns an empty
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses a configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the text does not match the expected shape.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Returns the address of a named device.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&str> {
        self.devices.get(name).map(String::as_str)
    }

    /// Returns the device table, sorted by name.
    #[must_use]
    pub fn devices(&self) -> &BTreeMap<String, String> {
        &self.devices
    }

    /// Returns the configured timeout or the transport default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
            .map_or(HttpConfig::DEFAULT_TIMEOUT, Duration::from_secs)
    }

    /// Returns the configured HTTP method or the transport default.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method.unwrap_or_default()
    }

    /// Builds the transport configuration for `host`.
    #[must_use]
    pub fn http_config(&self, host: impl Into<String>) -> HttpConfig {
        HttpConfig::new(host)
            .with_timeout(self.timeout())
            .with_method(self.method())
    }

    /// Returns the effective settings as sorted `(key, value)` pairs.
    #[must_use]
    pub fn settings(&self, path: &Path) -> Vec<(String, String)> {
        let devices = self
            .devices
            .iter()
            .map(|(name, address)| format!("{name}:{address}"))
            .collect::<Vec<_>>()
            .join(" ");

        vec![
            ("config".to_string(), path.display().to_string()),
            ("devices".to_string(), format!("map[{devices}]")),
            ("method".to_string(), self.method().to_string()),
            ("timeout".to_string(), format!("{}s", self.timeout().as_secs())),
        ]
    }
}
