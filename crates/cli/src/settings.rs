// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User settings file
//!
//! Looked up from `--config`, then `$JF_CONFIG`, then
//! `<config_dir>/jf/config.toml`. Only the last may be missing.

use crate::error::JfError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file
pub const CONFIG_ENV: &str = "JF_CONFIG";

const DEFAULT_URL_PREFIX: &str = "file://";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Catalog used when `--catalog` is not given
    pub catalog: Option<PathBuf>,
    pub urls: UrlSettings,
    /// Location service; without it no info type is looked up
    pub location: Option<LocationSettings>,
    pub user: UserSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlSettings {
    pub prefix: String,
}

impl Default for UrlSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSettings {
    pub base_url: String,
    #[serde(default)]
    pub handled_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserSettings {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load settings from an explicit path, the environment, or the
    /// default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                if !path.exists() {
                    return Err(JfError::settings_not_found(&path).into());
                }
                Self::read(&path)
            }
            None => match default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        let settings = Self::parse(&content)
            .with_context(|| format!("invalid settings in {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jf").join("config.toml"))
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
