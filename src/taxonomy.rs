//! Static transfer-scenario taxonomy.
//!
//! The table is an ordered slice, not a map: declaration order is the
//! tie-break order for classification and must stay stable across releases
//! so previously classified bulletins keep their category.

use serde::{Deserialize, Serialize};

/// One of the seven theorized state-decision scenarios, plus the sentinel
/// for records no scenario matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    Privatization,
    PublicWorks,
    UtilityTariffs,
    DevaluationRelief,
    PrivateServices,
    Pensions,
    TaxShift,
    Unclassified,
}

impl DecisionKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Privatization,
            Self::PublicWorks,
            Self::UtilityTariffs,
            Self::DevaluationRelief,
            Self::PrivateServices,
            Self::Pensions,
            Self::TaxShift,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Privatization => "Privatización / Concesión",
            Self::PublicWorks => "Obra Pública / Contratos",
            Self::UtilityTariffs => "Tarifas Servicios Públicos",
            Self::DevaluationRelief => "Compensación por Devaluación",
            Self::PrivateServices => "Servicios Privados (Salud/Educación)",
            Self::Pensions => "Jubilaciones / Pensiones",
            Self::TaxShift => "Traslado Impositivo",
            Self::Unclassified => "No identificado",
        }
    }
}

/// Framework confidence that a category implies an income transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertaintyLevel {
    Nil,
    MediumHigh,
    High,
    VeryHigh,
}

impl CertaintyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nil => "Nula",
            Self::MediumHigh => "Media-Alta",
            Self::High => "Alta",
            Self::VeryHigh => "Muy Alta",
        }
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::Nil => 0,
            Self::MediumHigh => 25,
            Self::High => 30,
            Self::VeryHigh => 40,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    pub kind: DecisionKind,
    /// Trigger keywords, stored pre-normalized (lower-case, NFC).
    pub keywords: &'static [&'static str],
    /// Sector that finances or loses income in the transfer.
    pub origin: &'static str,
    /// Sector that receives the rent or benefit.
    pub destination: &'static str,
    /// Technical or legal instrument used for the transfer.
    pub mechanism: &'static str,
    pub certainty: CertaintyLevel,
}

static TAXONOMY: [TaxonomyEntry; 7] = [
    TaxonomyEntry {
        kind: DecisionKind::Privatization,
        keywords: &["privatización", "concesión", "adjudicación", "venta de activos"],
        origin: "Patrimonio Estatal",
        destination: "Empresas Privadas (Rent Seeking)",
        mechanism: "Subvaluación de activos o canon bajo",
        certainty: CertaintyLevel::High,
    },
    TaxonomyEntry {
        kind: DecisionKind::PublicWorks,
        keywords: &["obra pública", "licitación", "contratación", "redeterminación"],
        origin: "Contribuyentes (Impuestos Futuros)",
        destination: "Empresas Contratistas",
        mechanism: "Sobreprecios o continuación ineficiente",
        certainty: CertaintyLevel::MediumHigh,
    },
    TaxonomyEntry {
        kind: DecisionKind::UtilityTariffs,
        keywords: &["tarifa", "cuadro tarifario", "peaje", "subsidio"],
        origin: "Usuarios / Población",
        destination: "Empresas Concesionarias",
        mechanism: "Aumento de tarifa o subsidio cruzado",
        certainty: CertaintyLevel::VeryHigh,
    },
    TaxonomyEntry {
        kind: DecisionKind::DevaluationRelief,
        keywords: &["devaluación", "tipo de cambio", "licuación de pasivos"],
        origin: "Tesoro Nacional (Población)",
        destination: "Empresas Endeudadas",
        mechanism: "Licuación de pasivos privados",
        certainty: CertaintyLevel::High,
    },
    TaxonomyEntry {
        kind: DecisionKind::PrivateServices,
        keywords: &["prepaga", "medicina privada", "educación privada", "arancel"],
        origin: "Salario de los Trabajadores",
        destination: "Empresas de Salud/Educación",
        mechanism: "Autorización de aumento por encima de inflación",
        certainty: CertaintyLevel::High,
    },
    TaxonomyEntry {
        kind: DecisionKind::Pensions,
        keywords: &["jubilación", "jubilaciones", "pensión", "movilidad previsional"],
        origin: "Jubilados (Ingreso Diferido)",
        destination: "Estado (Tesoro)",
        mechanism: "Fórmula de movilidad a la baja / Inflación",
        certainty: CertaintyLevel::VeryHigh,
    },
    TaxonomyEntry {
        kind: DecisionKind::TaxShift,
        keywords: &["impuesto", "alícuota", "gravamen", "doble imposición"],
        origin: "Consumidor Final",
        destination: "Estado / Empresas",
        mechanism: "Traslado de carga fiscal (Doble imposición)",
        certainty: CertaintyLevel::VeryHigh,
    },
];

/// Entries in tie-break order, for classification iteration.
pub fn ordered() -> &'static [TaxonomyEntry] {
    &TAXONOMY
}

/// Table lookup; `Unclassified` (and only it) has no entry.
pub fn entry(kind: DecisionKind) -> Option<&'static TaxonomyEntry> {
    TAXONOMY.iter().find(|entry| entry.kind == kind)
}
