//! App-identity configuration for the mobile shell.
//!
//! DESIGN
//! ======
//! The web client is packaged as a static bundle inside a native shell. The
//! shell reads a single JSON document naming the app, the bundle directory,
//! and the URL scheme it serves the bundle under. This module owns that
//! document: defaults, file loading, overrides, and validation.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DEFAULT_APP_ID: &str = "com.blockpaperscissors.app";
const DEFAULT_APP_NAME: &str = "Block Paper Scissors";
const DEFAULT_WEB_DIR: &str = "build";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid app id `{0}`: expected reverse-domain form like com.example.app")]
    InvalidAppId(String),
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),
}

// =============================================================================
// TYPES
// =============================================================================

/// URL scheme the Android shell serves the bundled web assets under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AndroidScheme {
    Http,
    #[default]
    Https,
}

/// Settings for the shell's embedded web server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellServerConfig {
    pub android_scheme: AndroidScheme,
}

/// Application identity consumed once at packaging time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub app_id: String,
    pub app_name: String,
    pub web_dir: String,
    pub server: ShellServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_owned(),
            app_name: DEFAULT_APP_NAME.to_owned(),
            web_dir: DEFAULT_WEB_DIR.to_owned(),
            server: ShellServerConfig::default(),
        }
    }
}

/// Per-field overrides, typically from CLI flags or environment variables.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub web_dir: Option<String>,
    pub android_scheme: Option<AndroidScheme>,
}

// =============================================================================
// OPERATIONS
// =============================================================================

impl AppConfig {
    /// Load from a JSON file, or fall back to the built-in defaults.
    /// Fields missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not valid JSON for this shape.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Ok(serde_json::from_str(&raw)?)
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(app_id) = overrides.app_id {
            self.app_id = app_id;
        }
        if let Some(app_name) = overrides.app_name {
            self.app_name = app_name;
        }
        if let Some(web_dir) = overrides.web_dir {
            self.web_dir = web_dir;
        }
        if let Some(scheme) = overrides.android_scheme {
            self.server.android_scheme = scheme;
        }
        self
    }

    /// Check the identity fields the shell tooling would otherwise reject late.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_reverse_domain(&self.app_id) {
            return Err(ConfigError::InvalidAppId(self.app_id.clone()));
        }
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::EmptyField("appName"));
        }
        if self.web_dir.trim().is_empty() {
            return Err(ConfigError::EmptyField("webDir"));
        }
        Ok(())
    }

    /// Render the document in the shell's on-disk format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `com.example.app`: two or more segments, each starting with a letter and
/// containing only ASCII alphanumerics or underscores.
fn is_reverse_domain(id: &str) -> bool {
    let mut segments = 0;
    for segment in id.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !first.is_ascii_alphabetic() {
            return false;
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}
