use super::domain::{RiskTier, ScoreBreakdown};
use super::normalizer::normalize_text;
use crate::taxonomy::{self, CertaintyLevel, DecisionKind};

/// Every analyzed act is, by theoretical premise, formally legal.
const LEGALITY_POINTS: u8 = 30;

/// Explicit discretion: the notice itself invokes an exceptional procedure.
const EXPLICIT_DISCRETION_POINTS: u8 = 30;

/// Implicit technical discretion present in any state decision.
const BASELINE_DISCRETION_POINTS: u8 = 15;

/// Procedure markers that elude standard procurement controls.
const DISCRETION_KEYWORDS: &[&str] = &[
    "emergencia",
    "urgencia",
    "directa",
    "excepcional",
    "excepción",
    "discrecional",
];

/// Computes the intensity index for an already classified record.
///
/// Deterministic in (kind, detail text, taxonomy table); the returned total
/// is always the sum of the three component fields.
pub fn score(kind: DecisionKind, detail: &str) -> ScoreBreakdown {
    if kind == DecisionKind::Unclassified {
        return ScoreBreakdown {
            legality: 0,
            discretion: 0,
            certainty: 0,
            total: 0,
            formula: "No aplica".to_string(),
            tier: RiskTier::Low,
        };
    }

    let discretion = if has_discretion_indicator(detail) {
        EXPLICIT_DISCRETION_POINTS
    } else {
        BASELINE_DISCRETION_POINTS
    };

    let (certainty_level, certainty) = match taxonomy::entry(kind) {
        Some(entry) => (entry.certainty, entry.certainty.points()),
        None => (CertaintyLevel::Nil, 0),
    };

    let total = LEGALITY_POINTS + discretion + certainty;
    debug_assert!(total <= 100);

    let formula = format!(
        "Legal({LEGALITY_POINTS}) + Discrec({discretion}) + Certeza {}({certainty}) = {total}%",
        certainty_level.label()
    );

    ScoreBreakdown {
        legality: LEGALITY_POINTS,
        discretion,
        certainty,
        total,
        formula,
        tier: RiskTier::from_index(total),
    }
}

/// Secondary keyword scan shared with the procurement cross-check.
pub(crate) fn has_discretion_indicator(text: &str) -> bool {
    let normalized = normalize_text(text);
    DISCRETION_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclassified_short_circuits_to_zero() {
        let breakdown = score(DecisionKind::Unclassified, "urgencia por emergencia");
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.formula, "No aplica");
        assert_eq!(breakdown.tier, RiskTier::Low);
        assert_eq!(
            (breakdown.legality, breakdown.discretion, breakdown.certainty),
            (0, 0, 0)
        );
    }

    #[test]
    fn explicit_discretion_marker_raises_the_component() {
        let breakdown = score(
            DecisionKind::Privatization,
            "Adjudicación DIRECTA por urgencia",
        );
        assert_eq!(breakdown.discretion, 30);
        assert_eq!(breakdown.total, 90);
        assert_eq!(breakdown.tier, RiskTier::High);
        assert_eq!(breakdown.formula, "Legal(30) + Discrec(30) + Certeza Alta(30) = 90%");
    }

    #[test]
    fn baseline_discretion_applies_without_markers() {
        let breakdown = score(DecisionKind::Privatization, "Concesión de rutas nacionales");
        assert_eq!(breakdown.discretion, 15);
        assert_eq!(breakdown.total, 75);
        assert_eq!(breakdown.tier, RiskTier::High);
    }

    #[test]
    fn certainty_comes_from_the_taxonomy_entry() {
        let breakdown = score(DecisionKind::PublicWorks, "Licitación de obra pública");
        assert_eq!(breakdown.certainty, 25);
        assert_eq!(breakdown.total, 70);
        assert_eq!(breakdown.tier, RiskTier::Medium);

        let breakdown = score(DecisionKind::Pensions, "Movilidad previsional");
        assert_eq!(breakdown.certainty, 40);
        assert_eq!(breakdown.total, 85);
    }

    #[test]
    fn total_is_always_the_sum_of_its_components() {
        for kind in DecisionKind::ordered() {
            for detail in ["trámite de urgencia", "trámite ordinario"] {
                let breakdown = score(kind, detail);
                assert_eq!(
                    breakdown.total,
                    breakdown.legality + breakdown.discretion + breakdown.certainty
                );
            }
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let first = score(DecisionKind::UtilityTariffs, "Aumento de tarifa por emergencia");
        let second = score(DecisionKind::UtilityTariffs, "Aumento de tarifa por emergencia");
        assert_eq!(first, second);
    }
}
