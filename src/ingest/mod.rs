//! CSV interchange format for raw bulletin snapshots.
//!
//! Scrapers and API clients live outside this crate; what crosses the
//! boundary is a flat CSV of (fecha, seccion, detalle, link) rows. This
//! module reads those exports into [`RawRecord`]s and writes the dated raw
//! snapshot back out for audit.

use crate::analysis::RawRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum IngestError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { value: String },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(err) => write!(f, "failed to read bulletin export: {}", err),
            IngestError::Csv(err) => write!(f, "invalid bulletin CSV data: {}", err),
            IngestError::InvalidDate { value } => {
                write!(f, "bulletin row has unparseable date '{}'", value)
            }
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(err) => Some(err),
            IngestError::Csv(err) => Some(err),
            IngestError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct BulletinImporter;

impl BulletinImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RawRecord>, IngestError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize::<BulletinRow>() {
            records.push(row?.into_record()?);
        }

        Ok(records)
    }
}

/// Writes the dated raw snapshot (`bora_<YYYYMMDD>.csv`) and returns its
/// path. Unlike the report artifact this write is not best-effort: a failed
/// snapshot is a caller error.
pub fn write_snapshot(
    records: &[RawRecord],
    data_dir: &Path,
    snapshot_date: NaiveDate,
) -> Result<PathBuf, IngestError> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join(format!("bora_{}.csv", snapshot_date.format("%Y%m%d")));

    let file = std::fs::File::create(&path)?;
    let mut writer = csv::Writer::from_writer(file);
    for record in records {
        writer.serialize(BulletinRow::from_record(record))?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "raw snapshot written");
    Ok(path)
}

#[derive(Debug, Serialize, Deserialize)]
struct BulletinRow {
    #[serde(rename = "fecha")]
    date: String,
    #[serde(rename = "seccion", default, deserialize_with = "empty_string_as_none")]
    section: Option<String>,
    #[serde(rename = "detalle", default, deserialize_with = "empty_string_as_none")]
    detail: Option<String>,
    #[serde(rename = "link", default, deserialize_with = "empty_string_as_none")]
    link: Option<String>,
}

impl BulletinRow {
    fn into_record(self) -> Result<RawRecord, IngestError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            IngestError::InvalidDate {
                value: self.date.clone(),
            }
        })?;

        Ok(RawRecord {
            date,
            section: self.section.unwrap_or_default(),
            detail: self.detail.unwrap_or_default(),
            link: self.link.unwrap_or_default(),
        })
    }

    fn from_record(record: &RawRecord) -> Self {
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            section: Some(record.section.clone()),
            detail: Some(record.detail.clone()),
            link: Some(record.link.clone()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
