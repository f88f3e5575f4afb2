// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Configuration layout.
//!
//! Specify the layout of the optional settings file that iggen reads at
//! startup. Every key is optional, and missing keys fall back to defaults that
//! point at GitHub's gitignore template repository.
//!
//! # General Layout
//!
//! ```toml
//! [remote]
//! listing_url = "https://api.github.com/repos/github/gitignore/contents"
//! raw_url = "https://raw.githubusercontent.com/github/gitignore/main"
//! timeout = 3
//! proxy = "127.0.0.1:7890"
//! ```

use serde::Deserialize;
use std::{
    fs::read_to_string,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use tracing::debug;

/// Default endpoint listing the contents of the template repository.
pub const DEFAULT_LISTING_URL: &str = "https://api.github.com/repos/github/gitignore/contents";

/// Default base URL that raw template bodies are served from.
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com/github/gitignore/main";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT: u64 = 3;

/// Settings file layout.
#[derive(Default, Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Remote template source settings.
    pub remote: RemoteSettings,
}

impl Settings {
    /// Load settings from target file.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::Read`] if file cannot be read.
    /// - Return [`ConfigError::Deserialize`] if file content is malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("load settings from {:?}", path.display());
        read_to_string(path)
            .map_err(|err| ConfigError::Read {
                source: err,
                path: path.to_path_buf(),
            })?
            .parse()
    }

    /// Load settings from target file, or use defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// - Return [`ConfigError::Read`] if file exists but cannot be read.
    /// - Return [`ConfigError::Deserialize`] if file content is malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("no settings at {:?}, using defaults", path.as_ref().display());
                Ok(Self::default())
            }
            result => result,
        }
    }
}

impl FromStr for Settings {
    type Err = ConfigError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        toml::de::from_str(data).map_err(ConfigError::Deserialize)
    }
}

/// Remote template source settings.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSettings {
    /// Endpoint returning a JSON listing of the template repository.
    pub listing_url: String,

    /// Base URL raw template bodies are fetched from.
    pub raw_url: String,

    /// Per-request timeout in seconds.
    pub timeout: u64,

    /// Forward HTTP proxy address, e.g., "127.0.0.1:7890".
    pub proxy: Option<String>,
}

impl RemoteSettings {
    /// Per-request timeout as [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for RemoteSettings {
    fn default() -> Self {
        Self {
            listing_url: DEFAULT_LISTING_URL.into(),
            raw_url: DEFAULT_RAW_URL.into(),
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file cannot be read.
    #[error("failed to read settings file at {:?}", path.display())]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Failed to deserialize settings.
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),
}

/// Friendly result alias :3
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
