use serde::Serialize;

/// One "Glosario" sheet row: output column name and its reading guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlossaryEntry {
    pub column: &'static str,
    pub description: &'static str,
}

/// Fixed literal data, one row per analysis-sheet column. Not derived from
/// the records.
pub const GLOSSARY: &[GlossaryEntry] = &[
    GlossaryEntry {
        column: "fecha",
        description: "Fecha de publicación del Boletín Oficial analizado.",
    },
    GlossaryEntry {
        column: "seccion",
        description: "Sección del boletín (1ra = Legislación, 3ra = Contrataciones).",
    },
    GlossaryEntry {
        column: "tipo_decision",
        description: "Clasificación teórica según las 7 decisiones de 'Great Corruption': \
                      1. Privatización/Concesión, 2. Obra Pública, 3. Tarifas, 4. Devaluación, \
                      5. Servicios Privados, 6. Jubilaciones, 7. Traslado Impositivo.",
    },
    GlossaryEntry {
        column: "indice_total",
        description: "Intensidad del fenómeno (0-100%). Suma de Legalidad + Discrecionalidad + Certeza.",
    },
    GlossaryEntry {
        column: "nivel_riesgo_teorico",
        description: "Nivel de riesgo teórico (Bajo/Medio/Alto) derivado del índice por umbrales fijos.",
    },
    GlossaryEntry {
        column: "elaboracion_indice",
        description: "Fórmula desglosada del cálculo del índice. Ver artículo: \
                      https://www.emerald.com/jfc/article-abstract/28/2/580/224032/Great-corruption-theory-of-corrupt-phenomena?redirectedFrom=fulltext",
    },
    GlossaryEntry {
        column: "origen",
        description: "Sector que financia o pierde ingresos en la transferencia (Víctima económica).",
    },
    GlossaryEntry {
        column: "destino",
        description: "Sector que recibe la renta o beneficio (Beneficiario / Rent Seeking).",
    },
    GlossaryEntry {
        column: "mecanismo",
        description: "Herramienta técnica/legal usada para la transferencia (ej. Subsidio, Tarifa).",
    },
    GlossaryEntry {
        column: "detalle",
        description: "Resumen extraído de la norma en el Boletín Oficial.",
    },
    GlossaryEntry {
        column: "link",
        description: "Enlace a la fuente oficial.",
    },
];
