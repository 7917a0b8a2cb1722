//! Procurement/legislation cross-check.
//!
//! Pairs contract awards whose titles invoke exceptional procedures with
//! the legislation that could shelter them, producing the discretion-alert
//! matrix consumed by the presentation layer.

use crate::analysis::has_discretion_indicator;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

const DEFAULT_AUTHORITY: &str = "Administración Pública";
const RISK_KIND: &str = "Discrecionalidad Técnica Detectada";
const CORRUPTION_PHASE: &str = "Ejecución / Ocultación";

/// One adjudication row from the procurement feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractAward {
    pub title: String,
    pub authority: Option<String>,
    pub amount: f64,
}

/// One statute or decree from the legislation feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegislationItem {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscretionAlert {
    pub alert_date: NaiveDate,
    pub awardee: String,
    pub authority: String,
    pub risk_kind: &'static str,
    pub linked_law: String,
    pub corruption_phase: &'static str,
}

/// Pairs every award carrying a discretion indicator with each legislation
/// item. Output order follows the input feeds.
pub fn crosscheck(
    awards: &[ContractAward],
    legislation: &[LegislationItem],
    today: NaiveDate,
) -> Vec<DiscretionAlert> {
    let mut alerts = Vec::new();

    for award in awards {
        if !has_discretion_indicator(&award.title) {
            continue;
        }

        for law in legislation {
            alerts.push(DiscretionAlert {
                alert_date: today,
                awardee: award.title.clone(),
                authority: award
                    .authority
                    .clone()
                    .unwrap_or_else(|| DEFAULT_AUTHORITY.to_string()),
                risk_kind: RISK_KIND,
                linked_law: law.title.clone(),
                corruption_phase: CORRUPTION_PHASE,
            });
        }
    }

    alerts
}

/// Persists the alert matrix as `matriz_alertas.csv` with a UTF-8 BOM so
/// spreadsheet viewers detect the encoding. An empty matrix still produces
/// a header-only file so downstream viewers do not error on a missing one.
pub fn write_alert_matrix(
    alerts: &[DiscretionAlert],
    data_dir: &Path,
) -> Result<PathBuf, std::io::Error> {
    std::fs::create_dir_all(data_dir)?;
    let path = data_dir.join("matriz_alertas.csv");

    let mut file = std::fs::File::create(&path)?;
    file.write_all(b"\xef\xbb\xbf")?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record([
            "fecha_alerta",
            "empresa_adjudicataria",
            "organismo",
            "tipo_riesgo",
            "ley_vinculada",
            "fase_corrupcion",
        ])
        .map_err(csv_to_io)?;

    for alert in alerts {
        writer
            .write_record([
                alert.alert_date.format("%Y-%m-%d").to_string(),
                alert.awardee.clone(),
                alert.authority.clone(),
                alert.risk_kind.to_string(),
                alert.linked_law.clone(),
                alert.corruption_phase.to_string(),
            ])
            .map_err(csv_to_io)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), alerts = alerts.len(), "alert matrix written");
    Ok(path)
}

fn csv_to_io(err: csv::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err)
}
