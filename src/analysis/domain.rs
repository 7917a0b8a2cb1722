use crate::taxonomy::DecisionKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub(crate) const UNDETERMINED: &str = "Indeterminado";
pub(crate) const NOT_DETECTED: &str = "No detectado";

/// One bulletin notice as handed over by an ingestion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub section: String,
    pub detail: String,
    pub link: String,
}

/// Coarse bucket derived from the intensity index via fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Boundary values belong to the lower bucket: 40 is Low, 70 is Medium.
    pub const fn from_index(index: u8) -> Self {
        if index <= 40 {
            Self::Low
        } else if index <= 70 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Bajo",
            Self::Medium => "Medio",
            Self::High => "Alto",
        }
    }
}

/// Discrete addends of the intensity index, kept for audit traceability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub legality: u8,
    pub discretion: u8,
    pub certainty: u8,
    /// Always `legality + discretion + certainty`.
    pub total: u8,
    pub formula: String,
    pub tier: RiskTier,
}

/// A raw record after its single classify+score pass. Never mutated; a
/// recomputation produces a replacement value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    pub raw: RawRecord,
    pub kind: DecisionKind,
    pub origin: &'static str,
    pub destination: &'static str,
    pub mechanism: &'static str,
    pub score: ScoreBreakdown,
}
