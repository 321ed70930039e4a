use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot open config file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Starting capacities for the two tables a concordance owns.
///
/// Capacities are validated when the tables are built, not here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConcordanceConfig {
    pub stop_table_capacity: usize,
    pub index_capacity: usize,
}

impl ConcordanceConfig {
    pub const DEFAULT_CAPACITY: usize = 191;

    pub fn v0() -> Self {
        Self {
            stop_table_capacity: Self::DEFAULT_CAPACITY,
            index_capacity: Self::DEFAULT_CAPACITY,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let f = File::open(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }
}

impl Default for ConcordanceConfig {
    fn default() -> Self {
        Self::v0()
    }
}
