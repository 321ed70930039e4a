use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::concordance::index::{Concordance, ConcordanceError};
use crate::types::{ConcordanceExport, ConcordanceReport, ReportEntry};

impl Concordance {
    /// Snapshot of the index, sorted by word.
    pub fn report(&self) -> ConcordanceReport {
        let entries = self
            .index
            .iter()
            .map(|(word, lines)| ReportEntry {
                word: word.to_string(),
                lines: lines.clone(),
            })
            .collect();

        ConcordanceReport::new(entries)
    }

    /// Write the text report: `word: lines...`, no trailing line break.
    pub fn write_concordance(&self, path: &Path) -> Result<(), ConcordanceError> {
        let report = self.report();

        fs::write(path, report.render()).map_err(|source| ConcordanceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            words = report.len(),
            version = report.version().as_str(),
            "Wrote concordance"
        );
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ConcordanceError> {
        let export = ConcordanceExport::new(self.report(), self.config.clone());

        let write_error = |source: std::io::Error| ConcordanceError::Write {
            path: path.to_path_buf(),
            source,
        };

        let f = File::create(path).map_err(write_error)?;
        let mut writer = BufWriter::new(f);
        serde_json::to_writer_pretty(&mut writer, &export).map_err(|e| {
            if e.is_io() {
                write_error(e.into())
            } else {
                ConcordanceError::Serialization(e)
            }
        })?;
        writer.flush().map_err(write_error)?;

        info!(
            path = %path.display(),
            words = export.word_count,
            version = export.report_version.as_str(),
            "Wrote concordance export"
        );
        Ok(())
    }
}
