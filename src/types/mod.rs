pub mod config;
pub mod report;

pub use config::{ConcordanceConfig, ConfigError};
pub use report::{ConcordanceExport, ConcordanceReport, ReportEntry, ReportVersion};
