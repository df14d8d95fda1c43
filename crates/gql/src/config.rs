use gql_core::{Error, Result};

use serde::Deserialize;
use std::path::PathBuf;

/// Runtime options for a [`Db`](crate::Db).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record a composite index for every query that needs one and write
    /// them all to [`Config::index_file_path`].
    pub generate_index_file: bool,

    /// Where the index file is written. The file is rewritten in full with
    /// the indexes seen by this process; a file containing anything else is
    /// left untouched and index generation fails instead.
    pub index_file_path: PathBuf,

    /// Check every generated key against the store before using it.
    pub double_check_generated_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generate_index_file: false,
            index_file_path: PathBuf::from("index.yaml"),
            double_check_generated_ids: false,
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::invalid_config(err.to_string()))
    }

    pub fn generate_index_file(mut self, enabled: bool) -> Self {
        self.generate_index_file = enabled;
        self
    }

    pub fn index_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.index_file_path = path.into();
        self
    }

    pub fn double_check_generated_ids(mut self, enabled: bool) -> Self {
        self.double_check_generated_ids = enabled;
        self
    }
}
