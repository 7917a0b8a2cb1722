mod classifier;
mod domain;
mod normalizer;
mod scorer;

pub use classifier::classify;
pub use domain::{ClassifiedRecord, RawRecord, RiskTier, ScoreBreakdown};
pub use scorer::score;

pub(crate) use scorer::has_discretion_indicator;

use crate::taxonomy;

/// Runs one classify+score pass over a batch of raw records.
///
/// Records are independent of each other; output order is input order.
pub fn analyze(records: &[RawRecord]) -> Vec<ClassifiedRecord> {
    records.iter().map(analyze_record).collect()
}

fn analyze_record(record: &RawRecord) -> ClassifiedRecord {
    let kind = classify(&record.detail);
    let score = score(kind, &record.detail);

    match taxonomy::entry(kind) {
        Some(entry) => ClassifiedRecord {
            raw: record.clone(),
            kind,
            origin: entry.origin,
            destination: entry.destination,
            mechanism: entry.mechanism,
            score,
        },
        None => ClassifiedRecord {
            raw: record.clone(),
            kind,
            origin: domain::UNDETERMINED,
            destination: domain::UNDETERMINED,
            mechanism: domain::NOT_DETECTED,
            score,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(detail: &str) -> RawRecord {
        RawRecord {
            date: NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date"),
            section: "Sección Primera".to_string(),
            detail: detail.to_string(),
            link: "https://www.boletinoficial.gob.ar/ejemplo".to_string(),
        }
    }

    #[test]
    fn analyze_enriches_matched_records_from_the_table() {
        let rows = analyze(&[record("Actualización del cuadro tarifario de peajes.")]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, crate::taxonomy::DecisionKind::UtilityTariffs);
        assert_eq!(rows[0].origin, "Usuarios / Población");
        assert_eq!(rows[0].mechanism, "Aumento de tarifa o subsidio cruzado");
    }

    #[test]
    fn analyze_applies_placeholders_to_unmatched_records() {
        let rows = analyze(&[record("Designación de personal administrativo.")]);
        assert_eq!(rows[0].kind, crate::taxonomy::DecisionKind::Unclassified);
        assert_eq!(rows[0].origin, "Indeterminado");
        assert_eq!(rows[0].destination, "Indeterminado");
        assert_eq!(rows[0].mechanism, "No detectado");
        assert_eq!(rows[0].score.total, 0);
    }

    #[test]
    fn analyze_preserves_input_order() {
        let rows = analyze(&[
            record("Aumento de tarifa eléctrica."),
            record("Texto sin categoría."),
            record("Nueva concesión vial."),
        ]);
        let kinds: Vec<_> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::taxonomy::DecisionKind::UtilityTariffs,
                crate::taxonomy::DecisionKind::Unclassified,
                crate::taxonomy::DecisionKind::Privatization,
            ]
        );
    }
}
