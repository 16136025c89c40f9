//! User configuration.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::api;

/// Settings for the catalog and its front ends.
///
/// Every field is optional in the configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// The PokéAPI instance to query.
  pub base_url: String,
  /// How many entries to list.
  pub page_limit: usize,
  /// Where to write logs; front ends pick a default when unset.
  pub log_file: Option<PathBuf>,
  /// The default log filter, overridden by `RUST_LOG`.
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url: api::DEFAULT_BASE_URL.to_string(),
      page_limit: 20,
      log_file: None,
      log_level: "info".to_string(),
    }
  }
}

/// A [`Config`] loading error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error("could not read {}: {source}", .path.display())]
  Io { path: PathBuf, source: io::Error },

  #[error("could not parse {}: {source}", .path.display())]
  Json {
    path: PathBuf,
    source: serde_json::Error,
  },
}

impl Config {
  /// Returns the default configuration file location,
  /// `<config dir>/pkcat/config.json`.
  pub fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("pkcat");
    path.push("config.json");
    Some(path)
  }

  /// Loads the configuration at `path`.
  pub fn from_path(path: &Path) -> Result<Self, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_slice(&bytes).map_err(|source| Error::Json {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Parses a configuration from JSON.
  pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
    serde_json::from_slice(bytes)
  }

  /// Loads the configuration at `path` if given, or else the one at
  /// [`Config::default_path()`].
  ///
  /// A missing default file is not an error; defaults are used instead.
  pub fn load(path: Option<&Path>) -> Result<Self, Error> {
    if let Some(path) = path {
      return Self::from_path(path);
    }

    match Self::default_path() {
      Some(path) if path.exists() => Self::from_path(&path),
      _ => Ok(Self::default()),
    }
  }

  /// Returns options for an [`api::Api`] pointed at the configured instance.
  pub fn api_options(&self) -> api::Options {
    api::Options {
      base_url: self.base_url.clone(),
    }
  }

  /// Returns the configured log file, or `<cache dir>/pkcat/<name>.log`.
  pub fn log_path(&self, name: &str) -> Option<PathBuf> {
    if let Some(path) = &self.log_file {
      return Some(path.clone());
    }

    let mut path = dirs::cache_dir()?;
    path.push("pkcat");
    path.push(format!("{}.log", name));
    Some(path)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_is_default() {
    assert_eq!(Config::from_slice(b"{}").unwrap(), Config::default());
  }

  #[test]
  fn partial_file_overrides_fields() {
    let config = Config::from_slice(
      br#"{"base_url": "http://localhost:8000/api/v2", "page_limit": 151}"#,
    )
    .unwrap();
    assert_eq!(config.base_url, "http://localhost:8000/api/v2");
    assert_eq!(config.page_limit, 151);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.api_options().base_url, "http://localhost:8000/api/v2");
  }

  #[test]
  fn malformed_file_is_an_error() {
    assert!(Config::from_slice(br#"{"page_limit": "many"}"#).is_err());
  }

  #[test]
  fn missing_explicit_file_is_an_error() {
    let path = Path::new("/nonexistent/pkcat/config.json");
    match Config::load(Some(path)) {
      Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
      other => panic!("unexpected result: {:?}", other),
    }
  }

  #[test]
  fn explicit_log_file_wins() {
    let config = Config {
      log_file: Some(PathBuf::from("/tmp/explorer.log")),
      ..Config::default()
    };
    assert_eq!(
      config.log_path("explorer"),
      Some(PathBuf::from("/tmp/explorer.log"))
    );
  }
}
