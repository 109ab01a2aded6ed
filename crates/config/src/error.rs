//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Recovery; every variant aborts the load step that raised it.
//!
//! Invariants:
//! - Variants carry the offending path (and line number where relevant).
//! - Env-file errors NEVER include raw line contents to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No env file exists at the requested path.
    #[error("env file not found at {path}")]
    MissingEnvFile {
        /// The path that was checked.
        path: PathBuf,
    },

    /// No config directory exists at the requested path.
    #[error("config directory not found at {path}")]
    MissingConfigDir {
        /// The path that was checked.
        path: PathBuf,
    },

    /// A non-comment, non-blank env line contained no `=` separator.
    ///
    /// Only the line number is reported, never the line contents.
    #[error("malformed line {line} in env file {path}: expected KEY=VALUE")]
    MalformedEnvLine {
        /// Path of the env file being parsed.
        path: PathBuf,
        /// One-based line number of the offending line.
        line: usize,
    },

    /// Failed to read a configuration definition file.
    #[error("failed to read config file at {path}")]
    ConfigFileRead {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a configuration definition file as JSON.
    #[error("failed to parse config file at {path}")]
    ConfigFileParse {
        /// Path of the unparseable file.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure while loading.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
