use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::config::ConcordanceConfig;

/// One line of a concordance: a word and the lines it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub word: String,
    /// Ascending, no duplicates.
    pub lines: Vec<usize>,
}

impl ReportEntry {
    /// `word: 1 4 9`
    pub fn render(&self) -> String {
        let lines: Vec<String> = self.lines.iter().map(|n| n.to_string()).collect();
        format!("{}: {}", self.word, lines.join(" "))
    }
}

/// A concordance in output order (words sorted by code point).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcordanceReport {
    entries: Vec<ReportEntry>,
}

impl ConcordanceReport {
    /// Sorts `entries` by word.
    pub fn new(mut entries: Vec<ReportEntry>) -> Self {
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text form: one entry per line, no trailing line break.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(ReportEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn version(&self) -> ReportVersion {
        ReportVersion::from_content(self.render().as_bytes())
    }
}

/// Content hash of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportVersion(String);

impl ReportVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ReportVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// JSON export of a concordance.
// Field order is part of the output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcordanceExport {
    pub report_version: ReportVersion,
    pub config: ConcordanceConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub word_count: usize,
    pub entries: ConcordanceReport,
}

impl ConcordanceExport {
    pub fn new(report: ConcordanceReport, config: ConcordanceConfig) -> Self {
        Self {
            report_version: report.version(),
            config,
            created_at: Utc::now(),
            word_count: report.len(),
            entries: report,
        }
    }
}
