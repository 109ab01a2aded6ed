//! Env-file parsing.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` lines from a `.env`-style file into a string map.
//!
//! Does NOT handle:
//! - The process environment; only the file contents are read.
//! - Quoting, escaping, or multi-line values.
//!
//! Invariants:
//! - Lines split on the FIRST `=`; keys and values are stored trimmed.
//! - Later duplicate keys overwrite earlier ones.
//! - Blank lines and lines whose trimmed form starts with `#` are skipped.
//! - A malformed line (no `=`) aborts the load with its line number; the
//!   line contents never appear in the error.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

/// Parses the env file at `path` into `map`, overwriting existing entries.
///
/// Returns the number of lines that produced an entry.
pub(crate) fn load_env_file(
    path: &Path,
    map: &mut BTreeMap<String, String>,
) -> Result<usize, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::MissingEnvFile {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    let mut stored = 0;
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(ConfigError::MalformedEnvLine {
                path: path.to_path_buf(),
                line: index + 1,
            });
        };
        map.insert(key.trim().to_string(), value.trim().to_string());
        stored += 1;
    }

    tracing::debug!(path = %path.display(), entries = stored, "env file loaded");
    Ok(stored)
}
