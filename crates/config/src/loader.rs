//! Configuration handle and loader.
//!
//! Responsibilities:
//! - Provide the `Config` handle holding the environment map and config tree.
//! - Provide a builder-pattern `ConfigLoader` with overridable input paths.
//! - Expose lookup accessors with default fallback.
//!
//! Does NOT handle:
//! - Env-file parsing (see `env.rs`) or directory scanning (see `tree.rs`).
//!
//! Invariants / Assumptions:
//! - `load` runs the env loader before the directory loader; the first error
//!   aborts the load, and steps that already completed are not rolled back.
//! - Accessors never error; absent keys fall back to the caller's default.
//! - Repeated `load_env` / `load_config_dir` calls merge additively,
//!   overwriting duplicate keys.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::env::load_env_file;
use crate::error::ConfigError;
use crate::tree::load_config_dir;
use crate::value::Value;

/// Default env file path, relative to the working directory.
const DEFAULT_ENV_PATH: &str = ".env";
/// Default config directory, relative to the working directory.
const DEFAULT_CONFIG_DIR: &str = "config";

/// Loaded configuration: a flat environment map plus a nested config tree.
///
/// Built by [`ConfigLoader::load`] and read afterwards, following the
/// load-once-read-many pattern. The handle is plain owned data; wrap it in
/// a lock if concurrent reloads are needed.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// `KEY=VALUE` pairs from the env file.
    env: BTreeMap<String, String>,
    /// Per-file value trees, keyed by file stem.
    tree: BTreeMap<String, Value>,
}

impl Config {
    /// Loads from the default locations, `.env` and `config/`.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvFile`] or
    /// [`ConfigError::MissingConfigDir`] when either input is absent, and
    /// parse errors for malformed contents.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Loads from explicit locations.
    ///
    /// # Errors
    /// Same contract as [`Config::load`].
    pub fn load_from(
        env_path: impl Into<PathBuf>,
        config_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        ConfigLoader::new()
            .with_env_path(env_path)
            .with_config_dir(config_dir)
            .load()
    }

    /// Merges the env file at `path` into the environment map.
    ///
    /// Repeated calls accumulate; duplicate keys are overwritten. Returns
    /// the number of entries stored.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingEnvFile`] if the file is absent and
    /// [`ConfigError::MalformedEnvLine`] for a line with no `=`.
    pub fn load_env(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        load_env_file(path.as_ref(), &mut self.env)
    }

    /// Merges the config definitions under `path` into the config tree.
    ///
    /// Repeated calls accumulate; duplicate stems are overwritten. Returns
    /// the number of files loaded.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingConfigDir`] if the directory is absent
    /// and read/parse errors for unusable definition files.
    pub fn load_config_dir(&mut self, path: impl AsRef<Path>) -> Result<usize, ConfigError> {
        load_config_dir(path.as_ref(), &mut self.tree)
    }

    /// Looks up an environment variable by exact key.
    pub fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Looks up an environment variable, falling back to `default`.
    pub fn env_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.env(key).unwrap_or(default)
    }

    /// Looks up a config value by dotted path.
    ///
    /// The first segment names a definition file's stem; remaining segments
    /// descend through nested mappings. Returns `None` when any segment is
    /// absent or an intermediate node is not a mapping. The value reached
    /// may itself be a sub-tree.
    pub fn get(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            Some((root, rest)) => self.tree.get(root)?.pointer(rest),
            None => self.tree.get(path),
        }
    }

    /// Looks up a config value by dotted path, falling back to `default`.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.get(path).unwrap_or(default)
    }

    /// Dotted-path lookup returning the value as a string slice.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }

    /// Dotted-path lookup returning the value as a boolean.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path)?.as_bool()
    }

    /// Dotted-path lookup returning the value as an `i64`.
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.get(path)?.as_i64()
    }

    /// Dotted-path lookup returning the value as an `f64`.
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.get(path)?.as_f64()
    }
}

/// Builder for [`Config`] with overridable input locations.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Path of the env file to load.
    env_path: PathBuf,
    /// Path of the config definitions directory.
    config_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a loader targeting the default locations.
    pub fn new() -> Self {
        Self {
            env_path: PathBuf::from(DEFAULT_ENV_PATH),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }

    /// Overrides the env file path.
    pub fn with_env_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_path = path.into();
        self
    }

    /// Overrides the config directory path.
    pub fn with_config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_dir = path.into();
        self
    }

    /// Runs the env loader, then the directory loader.
    ///
    /// # Errors
    /// The first failing step aborts the load and its error is returned.
    pub fn load(self) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        config.load_env(&self.env_path)?;
        config.load_config_dir(&self.config_dir)?;
        Ok(config)
    }
}
