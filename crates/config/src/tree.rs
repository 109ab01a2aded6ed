//! Config-directory scanning.
//!
//! Responsibilities:
//! - Scan a directory for `.json` definition files and merge each into the
//!   config tree under its file stem.
//!
//! Does NOT handle:
//! - Recursion into subdirectories.
//! - Formats other than JSON.
//!
//! Invariants:
//! - File names are processed in lexicographic order, so stem collisions
//!   resolve deterministically (last alphabetical wins).
//! - Each qualifying file overwrites any existing entry for its stem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::value::Value;

/// File extension recognized as a configuration definition.
const CONFIG_EXTENSION: &str = "json";

/// Scans the directory at `path` and merges each `.json` file into `tree`,
/// keyed by file stem.
///
/// Returns the number of files loaded.
pub(crate) fn load_config_dir(
    path: &Path,
    tree: &mut BTreeMap<String, Value>,
) -> Result<usize, ConfigError> {
    if !path.is_dir() {
        return Err(ConfigError::MissingConfigDir {
            path: path.to_path_buf(),
        });
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    let mut loaded = 0;
    for entry in entries {
        if entry.is_dir() {
            tracing::trace!(path = %entry.display(), "skipping subdirectory");
            continue;
        }
        if entry.extension().and_then(|ext| ext.to_str()) != Some(CONFIG_EXTENSION) {
            tracing::warn!(path = %entry.display(), "ignoring non-config file");
            continue;
        }
        let Some(stem) = entry.file_stem().and_then(|stem| stem.to_str()) else {
            tracing::warn!(path = %entry.display(), "ignoring file with non-UTF-8 name");
            continue;
        };

        let contents =
            std::fs::read_to_string(&entry).map_err(|source| ConfigError::ConfigFileRead {
                path: entry.clone(),
                source,
            })?;
        let value: Value =
            serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
                path: entry.clone(),
                source,
            })?;

        tracing::trace!(path = %entry.display(), key = stem, "config file loaded");
        tree.insert(stem.to_string(), value);
        loaded += 1;
    }

    tracing::debug!(path = %path.display(), files = loaded, "config directory loaded");
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn load(dir: &TempDir) -> Result<BTreeMap<String, Value>, ConfigError> {
        let mut tree = BTreeMap::new();
        load_config_dir(dir.path(), &mut tree)?;
        Ok(tree)
    }

    #[test]
    fn test_files_are_keyed_by_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("database.json"),
            r#"{"host": "localhost", "port": 5432}"#,
        )
        .unwrap();
        fs::write(dir.path().join("cache.json"), r#"{"ttl": 60}"#).unwrap();

        let tree = load(&dir).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(
            tree["database"].pointer("host").and_then(Value::as_str),
            Some("localhost")
        );
        assert_eq!(tree["cache"].pointer("ttl").and_then(Value::as_i64), Some(60));
    }

    #[test]
    fn test_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        let mut tree = BTreeMap::new();
        let err = load_config_dir(&dir.path().join("absent"), &mut tree).unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfigDir { .. }));
    }

    #[test]
    fn test_non_json_files_and_subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.json"), r#"{"name": "demo"}"#).unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.json"), r#"{}"#).unwrap();

        let tree = load(&dir).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.contains_key("app"));
    }

    #[test]
    fn test_scalar_and_sequence_documents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("banner.json"), r#""hello""#).unwrap();
        fs::write(dir.path().join("ports.json"), "[80, 443]").unwrap();

        let tree = load(&dir).unwrap();
        assert_eq!(tree["banner"].as_str(), Some("hello"));
        assert_eq!(tree["ports"].as_sequence().map(<[Value]>::len), Some(2));
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.json"), "{not json").unwrap();
        let mut tree = BTreeMap::new();
        let err = load_config_dir(dir.path(), &mut tree).unwrap_err();
        match err {
            ConfigError::ConfigFileParse { path, .. } => {
                assert!(path.ends_with("broken.json"));
            }
            other => panic!("expected ConfigFileParse, got {other:?}"),
        }
    }

    #[test]
    fn test_repeated_load_overwrites_existing_keys() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("app.json"), r#"{"v": 1}"#).unwrap();

        let mut tree = BTreeMap::new();
        load_config_dir(dir.path(), &mut tree).unwrap();
        assert_eq!(tree["app"].pointer("v").and_then(Value::as_i64), Some(1));

        fs::write(dir.path().join("app.json"), r#"{"v": 2}"#).unwrap();
        load_config_dir(dir.path(), &mut tree).unwrap();
        assert_eq!(tree["app"].pointer("v").and_then(Value::as_i64), Some(2));
        assert_eq!(tree.len(), 1);
    }
}
