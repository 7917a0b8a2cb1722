mod glossary;
mod workbook;

pub use glossary::{GlossaryEntry, GLOSSARY};

use crate::analysis::{self, ClassifiedRecord, RawRecord};
use crate::config::AppConfig;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

/// The enriched table plus whatever came out of the best-effort artifact
/// write. `rows` is always populated for downstream display, even when the
/// workbook could not be persisted.
#[derive(Debug)]
pub struct BulletinReport {
    pub rows: Vec<ClassifiedRecord>,
    pub glossary: &'static [GlossaryEntry],
    pub artifact: Option<PathBuf>,
    pub write_error: Option<ReportError>,
}

/// Assembles classified bulletins into the two-sheet report artifact.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    data_dir: PathBuf,
}

impl ReportBuilder {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Classifies and scores the batch, then writes
    /// `reporte_fenomenos_<YYYYMMDD>.xlsx` into the data directory.
    ///
    /// An empty batch short-circuits to an empty report with no artifact.
    /// A failed write is logged and carried on the report instead of
    /// aborting; the enriched rows are returned either way.
    pub fn build(&self, records: &[RawRecord], report_date: NaiveDate) -> BulletinReport {
        let rows = analysis::analyze(records);
        if rows.is_empty() {
            return BulletinReport {
                rows,
                glossary: GLOSSARY,
                artifact: None,
                write_error: None,
            };
        }

        let path = self.artifact_path(report_date);
        match self.persist(&path, &rows) {
            Ok(()) => {
                tracing::info!(path = %path.display(), rows = rows.len(), "report artifact written");
                BulletinReport {
                    rows,
                    glossary: GLOSSARY,
                    artifact: Some(path),
                    write_error: None,
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "report artifact not persisted");
                BulletinReport {
                    rows,
                    glossary: GLOSSARY,
                    artifact: None,
                    write_error: Some(error),
                }
            }
        }
    }

    pub fn artifact_path(&self, report_date: NaiveDate) -> PathBuf {
        let stamp = report_date.format("%Y%m%d");
        self.data_dir.join(format!("reporte_fenomenos_{stamp}.xlsx"))
    }

    fn persist(&self, path: &Path, rows: &[ClassifiedRecord]) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.data_dir).map_err(|source| ReportError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })?;
        workbook::write_workbook(path, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_path_is_date_stamped() {
        let builder = ReportBuilder::new("/tmp/fenomenos");
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date");
        assert_eq!(
            builder.artifact_path(date),
            PathBuf::from("/tmp/fenomenos/reporte_fenomenos_20251103.xlsx")
        );
    }

    #[test]
    fn glossary_covers_every_analysis_column() {
        let columns: Vec<&str> = GLOSSARY.iter().map(|entry| entry.column).collect();
        assert_eq!(columns, workbook::ANALYSIS_COLUMNS);
    }
}
