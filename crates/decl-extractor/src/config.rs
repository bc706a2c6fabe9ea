//! TOML configuration for the extractor.
//!
//! Settings load from `decl-extractor.toml` in the working directory, or
//! from an explicit `--config` path. Every section is optional and unknown
//! keys are ignored.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ExtractError, Result};
use crate::frontend::FrontendOptions;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "decl-extractor.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub frontend: FrontendSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FrontendSection {
    /// Front-end driver binary; `clang` when unset.
    pub binary: Option<String>,
    /// Flags forwarded verbatim (e.g. `-std=c11`, `-DFOO`).
    pub extra_flags: Vec<String>,
    /// Directories passed as `-I` flags.
    pub include_paths: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoggingSection {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Env-filter directive for the subscriber layers.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "decl_extractor=error",
            LogLevel::Warn => "decl_extractor=warn",
            LogLevel::Info => "decl_extractor=info",
            LogLevel::Debug => "decl_extractor=debug",
            LogLevel::Trace => "decl_extractor=trace",
        }
    }
}

impl Config {
    /// Load configuration from `explicit` or the default file, if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = std::fs::read_to_string(&path).map_err(|source| ExtractError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let mut config = Self::from_toml(&text)
            .map_err(|source| ExtractError::ConfigParse { path, source })?;
        config.normalize();
        Ok(config)
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Trim entries and drop empties.
    fn normalize(&mut self) {
        self.frontend.extra_flags = self
            .frontend
            .extra_flags
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self.frontend.include_paths = self
            .frontend
            .include_paths
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
    }

    /// Fold the config into front-end options. CLI pass-through arguments
    /// are appended after configured flags so they win.
    pub fn frontend_options(&self, passthrough_args: Vec<String>) -> FrontendOptions {
        let mut options = FrontendOptions::default();
        if let Some(binary) = self.frontend.binary.as_deref()
            && !binary.trim().is_empty()
        {
            options.binary = binary.trim().to_string();
        }
        options.include_paths = self.frontend.include_paths.clone();
        options.extra_flags = self.frontend.extra_flags.clone();
        options.passthrough_args = passthrough_args;
        options
    }
}

#[cfg(test)]
#[path = "../tests/src/config_tests.rs"]
mod tests;
