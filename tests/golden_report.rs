use std::fs;
use std::io::Cursor;

use concordance_core::concordance::Concordance;
use concordance_core::text::StopWords;
use concordance_core::types::{
    ConcordanceConfig, ConcordanceExport, ConcordanceReport, ReportEntry, ReportVersion,
};
use tempfile::tempdir;

fn entry(word: &str, lines: &[usize]) -> ReportEntry {
    ReportEntry {
        word: word.to_string(),
        lines: lines.to_vec(),
    }
}

fn build(text: &str) -> Concordance {
    let stop_words = StopWords::from_reader(Cursor::new("the\n"), 191).unwrap();
    let mut c = Concordance::new(ConcordanceConfig::v0(), stop_words).unwrap();
    c.add_text(Cursor::new(text)).unwrap();
    c
}

#[test]
fn golden_report_render() {
    let report = ConcordanceReport::new(vec![
        entry("zebra", &[4]),
        entry("apple", &[1, 3, 10]),
        entry("Mango", &[2]),
    ]);

    // code point order: uppercase sorts first
    assert_eq!(report.render(), "Mango: 2\napple: 1 3 10\nzebra: 4");
}

#[test]
fn empty_report_renders_empty() {
    let report = ConcordanceReport::default();
    assert!(report.is_empty());
    assert_eq!(report.render(), "");
}

#[test]
fn report_version_is_content_hash() {
    let report = ConcordanceReport::new(vec![entry("word", &[1])]);

    assert_eq!(report.version(), ReportVersion::from_content(b"word: 1"));
    assert!(report.version().as_str().starts_with("sha256:"));
    assert_eq!(report.version().as_str().len(), "sha256:".len() + 64);
}

#[test]
fn same_text_same_version_regardless_of_capacity() {
    let text = "one two three\nfour five six\none six\n";

    let small = {
        let stop_words = StopWords::from_reader(Cursor::new("the\n"), 3).unwrap();
        let config = ConcordanceConfig {
            stop_table_capacity: 3,
            index_capacity: 3,
        };
        let mut c = Concordance::new(config, stop_words).unwrap();
        c.add_text(Cursor::new(text)).unwrap();
        c
    };
    let large = build(text);

    assert_ne!(small.index().capacity(), large.index().capacity());
    assert_eq!(small.report(), large.report());
    assert_eq!(small.report().version(), large.report().version());
}

#[test]
fn golden_export_field_order() {
    let c = build("the quick brown fox\n");
    let export = ConcordanceExport::new(c.report(), c.config().clone());

    assert_eq!(export.word_count, 3);
    assert_eq!(export.report_version, c.report().version());

    let json_str = serde_json::to_string(&export).unwrap();

    let rv_pos = json_str.find("\"report_version\":").unwrap();
    let cf_pos = json_str.find("\"config\":").unwrap();
    let ca_pos = json_str.find("\"created_at\":").unwrap();
    let wc_pos = json_str.find("\"word_count\":").unwrap();
    let en_pos = json_str.find("\"entries\":").unwrap();

    assert!(rv_pos < cf_pos);
    assert!(cf_pos < ca_pos);
    assert!(ca_pos < wc_pos);
    assert!(wc_pos < en_pos);
}

#[test]
fn json_export_round_trips_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("concordance.json");

    let c = build("alpha beta\nbeta gamma\n");
    c.write_json(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["word_count"], 3);
    assert_eq!(value["config"]["index_capacity"], 191);
    assert_eq!(value["entries"][1]["word"], "beta");
    assert_eq!(value["entries"][1]["lines"], serde_json::json!([1, 2]));
}
