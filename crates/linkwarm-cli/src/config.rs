//! Configuration file support.
//!
//! ```toml
//! priority = "high"
//! user_agent = "warmer/1.0"
//! fetch = true
//!
//! [headers]
//! Purpose = "prefetch"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Format, Toml},
};
use linkwarm::{NativeOptions, Priority};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "linkwarm.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Figment(#[from] figment::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkwarmConfig {
    pub priority: Priority,
    pub user_agent: Option<String>,
    pub headers: BTreeMap<String, String>,
    /// Expose the fetch transport for high-priority requests.
    pub fetch: bool,
}

impl Default for LinkwarmConfig {
    fn default() -> Self {
        Self {
            priority: Priority::Standard,
            user_agent: None,
            headers: BTreeMap::new(),
            fetch: true,
        }
    }
}

impl LinkwarmConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `linkwarm.toml` in the
    /// working directory is used if present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Self::from_figment(Figment::new().merge(Toml::file(path)))
    }

    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::from_figment(Figment::new().merge(Toml::string(toml)))
    }

    fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Apply command-line overrides on top of the file.
    #[must_use]
    pub fn with_overrides(mut self, priority: Option<&str>, no_fetch: bool) -> Self {
        if priority.is_some() {
            self.priority = Priority::from_hint(priority);
        }
        if no_fetch {
            self.fetch = false;
        }
        self
    }

    pub fn native_options(&self) -> NativeOptions {
        let mut options = NativeOptions::default().fetch(self.fetch);
        if let Some(ref user_agent) = self.user_agent {
            options = options.user_agent(user_agent);
        }
        for (key, value) in &self.headers {
            options = options.header(key, value);
        }
        options
    }
}
