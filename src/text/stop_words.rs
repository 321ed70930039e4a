use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::table::{ProbingHashTable, TableError};

#[derive(Debug, Error)]
pub enum StopWordsError {
    #[error("Cannot open stop-word file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Set of words excluded from a concordance.
///
/// A thin wrapper over a unit-valued [`ProbingHashTable`].
#[derive(Debug, Clone)]
pub struct StopWords {
    table: ProbingHashTable<()>,
}

impl StopWords {
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Ok(Self {
            table: ProbingHashTable::new(capacity)?,
        })
    }

    /// One word per line. Trailing whitespace is trimmed and blank lines are
    /// skipped.
    pub fn from_reader<R: BufRead>(reader: R, capacity: usize) -> Result<Self, StopWordsError> {
        let mut stop_words = Self::with_capacity(capacity)?;

        for line in reader.lines() {
            let line = line?;
            let word = line.trim_end();
            if !word.is_empty() {
                stop_words.insert(word);
            }
        }

        Ok(stop_words)
    }

    pub fn from_file(path: &Path, capacity: usize) -> Result<Self, StopWordsError> {
        let file = File::open(path).map_err(|source| StopWordsError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let stop_words = Self::from_reader(BufReader::new(file), capacity)?;
        info!(
            path = %path.display(),
            words = stop_words.len(),
            capacity = stop_words.table.capacity(),
            "Loaded stop words"
        );
        Ok(stop_words)
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.table.insert(word, ());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn table(&self) -> &ProbingHashTable<()> {
        &self.table
    }
}
