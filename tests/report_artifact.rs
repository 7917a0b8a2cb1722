use chrono::NaiveDate;
use fenomenos::{RawRecord, ReportBuilder};
use std::path::PathBuf;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date")
}

fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord {
            date: report_date(),
            section: "Sección Segunda".to_string(),
            detail: "ADJUDICACIÓN DIRECTA por urgencia para la concesión de transporte de energía."
                .to_string(),
            link: "https://www.boletinoficial.gob.ar/ejemplo1".to_string(),
        },
        RawRecord {
            date: report_date(),
            section: "Sección Primera".to_string(),
            detail: "Aumento del cuadro tarifario de medicina prepaga y servicios de salud."
                .to_string(),
            link: "https://www.boletinoficial.gob.ar/ejemplo2".to_string(),
        },
        RawRecord {
            date: report_date(),
            section: "Sección Primera".to_string(),
            detail: "Feriado puente con fines turísticos.".to_string(),
            link: "https://www.boletinoficial.gob.ar/ejemplo3".to_string(),
        },
    ]
}

fn scratch_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fenomenos-{label}-{}", std::process::id()))
}

#[test]
fn build_writes_the_dated_workbook_and_returns_enriched_rows() {
    let dir = scratch_dir("report");
    let report = ReportBuilder::new(&dir).build(&sample_records(), report_date());

    assert_eq!(report.rows.len(), 3);
    assert!(report.write_error.is_none());

    let artifact = report.artifact.expect("artifact path recorded");
    assert_eq!(
        artifact.file_name().and_then(|name| name.to_str()),
        Some("reporte_fenomenos_20251103.xlsx")
    );
    let metadata = std::fs::metadata(&artifact).expect("artifact exists on disk");
    assert!(metadata.len() > 0);

    // Unclassified row keeps the placeholder enrichment.
    let unmatched = report
        .rows
        .iter()
        .find(|row| row.raw.detail.contains("Feriado"))
        .expect("unmatched row present");
    assert_eq!(unmatched.origin, "Indeterminado");
    assert_eq!(unmatched.score.total, 0);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn empty_input_produces_an_empty_report_without_an_artifact() {
    let dir = scratch_dir("report-empty");
    let report = ReportBuilder::new(&dir).build(&[], report_date());

    assert!(report.rows.is_empty());
    assert!(report.artifact.is_none());
    assert!(report.write_error.is_none());
    assert!(!dir.exists(), "no directory should be created for an empty batch");
}

#[test]
fn failed_persistence_still_returns_the_enriched_rows() {
    // A regular file where the data directory should be forces the failure.
    let blocker = scratch_dir("report-blocked");
    std::fs::write(&blocker, b"not a directory").expect("create blocking file");

    let report = ReportBuilder::new(&blocker).build(&sample_records(), report_date());

    assert_eq!(report.rows.len(), 3, "analysis value survives the failed write");
    assert!(report.artifact.is_none());
    assert!(report.write_error.is_some());

    std::fs::remove_file(&blocker).ok();
}

#[test]
fn glossary_ships_with_every_report() {
    let dir = scratch_dir("report-glossary");
    let report = ReportBuilder::new(&dir).build(&[], report_date());

    assert!(!report.glossary.is_empty());
    assert!(report
        .glossary
        .iter()
        .any(|entry| entry.column == "nivel_riesgo_teorico"));
}
