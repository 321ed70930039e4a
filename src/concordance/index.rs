use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, trace};

use crate::table::{ProbingHashTable, TableError};
use crate::text::{is_number, string_prep, words, StopWords, StopWordsError};
use crate::types::ConcordanceConfig;

#[derive(Debug, Error)]
pub enum ConcordanceError {
    #[error("Cannot open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Cannot write output file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    StopWords(#[from] StopWordsError),
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Word → line-number index over a text, ignoring stop words and numbers.
///
/// Owns two tables: the stop-word set and the index itself.
#[derive(Debug, Clone)]
pub struct Concordance {
    pub(crate) config: ConcordanceConfig,
    pub(crate) stop_words: StopWords,
    pub(crate) index: ProbingHashTable<Vec<usize>>,
}

impl Concordance {
    pub fn new(config: ConcordanceConfig, stop_words: StopWords) -> Result<Self, TableError> {
        let index = ProbingHashTable::new(config.index_capacity)?;
        Ok(Self {
            config,
            stop_words,
            index,
        })
    }

    pub fn from_stop_words_file(
        config: ConcordanceConfig,
        path: &Path,
    ) -> Result<Self, ConcordanceError> {
        let stop_words = StopWords::from_file(path, config.stop_table_capacity)?;
        Ok(Self::new(config, stop_words)?)
    }

    /// Replace the stop-word set. Words already indexed are kept.
    pub fn load_stop_table(&mut self, path: &Path) -> Result<(), ConcordanceError> {
        self.stop_words = StopWords::from_file(path, self.config.stop_table_capacity)?;
        Ok(())
    }

    /// Rebuild the index from the text file at `path`.
    ///
    /// Any previously indexed text is discarded, but only once the whole file
    /// has been read. On error the previous index is kept as it was.
    pub fn load_concordance_table(&mut self, path: &Path) -> Result<(), ConcordanceError> {
        let file = File::open(path).map_err(|source| ConcordanceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut index = ProbingHashTable::new(self.config.index_capacity)?;
        let lines = index_text(&mut index, &self.stop_words, BufReader::new(file))?;
        self.index = index;

        info!(
            path = %path.display(),
            lines,
            words = self.index.len(),
            capacity = self.index.capacity(),
            "Built concordance"
        );
        Ok(())
    }

    /// Index every line of `reader`, numbering lines from 1.
    ///
    /// Returns the number of lines read. Lines read before an I/O error stay
    /// indexed.
    pub fn add_text<R: BufRead>(&mut self, reader: R) -> Result<usize, ConcordanceError> {
        index_text(&mut self.index, &self.stop_words, reader)
    }

    /// Index a single raw line as `line_number`.
    pub fn add_line(&mut self, line_number: usize, line: &str) {
        index_line(&mut self.index, &self.stop_words, line_number, line);
    }

    pub fn lines_for(&self, word: &str) -> Option<&[usize]> {
        self.index.get(word).map(Vec::as_slice)
    }

    pub fn index(&self) -> &ProbingHashTable<Vec<usize>> {
        &self.index
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn config(&self) -> &ConcordanceConfig {
        &self.config
    }
}

fn index_text<R: BufRead>(
    index: &mut ProbingHashTable<Vec<usize>>,
    stop_words: &StopWords,
    reader: R,
) -> Result<usize, ConcordanceError> {
    let mut line_count = 0;
    for (i, line) in reader.lines().enumerate() {
        index_line(index, stop_words, i + 1, &line?);
        line_count = i + 1;
    }
    Ok(line_count)
}

fn index_line(
    index: &mut ProbingHashTable<Vec<usize>>,
    stop_words: &StopWords,
    line_number: usize,
    line: &str,
) {
    let prepared = string_prep(line);

    for word in words(&prepared) {
        if stop_words.contains(word) || is_number(word) {
            trace!(word, line_number, "Skipping word");
            continue;
        }

        match index.get_mut(word) {
            Some(lines) => {
                // One entry per line, kept ascending.
                if let Err(pos) = lines.binary_search(&line_number) {
                    lines.insert(pos, line_number);
                }
            }
            None => {
                index.insert(word, vec![line_number]);
            }
        }
    }
}
