use super::glossary::GLOSSARY;
use super::ReportError;
use crate::analysis::ClassifiedRecord;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Analysis-sheet column order; must stay aligned with [`GLOSSARY`].
pub(crate) const ANALYSIS_COLUMNS: &[&str] = &[
    "fecha",
    "seccion",
    "tipo_decision",
    "indice_total",
    "nivel_riesgo_teorico",
    "elaboracion_indice",
    "origen",
    "destino",
    "mecanismo",
    "detalle",
    "link",
];

const FORMULA_COLUMN: u16 = 5;
const DETAIL_COLUMN: u16 = 9;

/// Serializes the enriched rows and the glossary into a two-sheet workbook.
/// Single scoped write; the file handle is released on every exit path.
pub(crate) fn write_workbook(path: &Path, rows: &[ClassifiedRecord]) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();

    let analysis = workbook.add_worksheet();
    analysis.set_name("Analisis")?;
    write_analysis_sheet(analysis, rows)?;

    let glossary = workbook.add_worksheet();
    glossary.set_name("Glosario")?;
    write_glossary_sheet(glossary)?;

    workbook.save(path)?;
    Ok(())
}

fn write_analysis_sheet(
    sheet: &mut Worksheet,
    rows: &[ClassifiedRecord],
) -> Result<(), ReportError> {
    for (col, header) in ANALYSIS_COLUMNS.iter().enumerate() {
        sheet.write(0, col as u16, *header)?;
    }

    for (index, record) in rows.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write(row, 0, record.raw.date.format("%Y-%m-%d").to_string())?;
        sheet.write(row, 1, record.raw.section.as_str())?;
        sheet.write(row, 2, record.kind.label())?;
        sheet.write(row, 3, u32::from(record.score.total))?;
        sheet.write(row, 4, record.score.tier.label())?;
        sheet.write(row, 5, record.score.formula.as_str())?;
        sheet.write(row, 6, record.origin)?;
        sheet.write(row, 7, record.destination)?;
        sheet.write(row, 8, record.mechanism)?;
        sheet.write(row, 9, record.raw.detail.as_str())?;
        sheet.write(row, 10, record.raw.link.as_str())?;
    }

    sheet.set_column_width(FORMULA_COLUMN, 45)?;
    sheet.set_column_width(DETAIL_COLUMN, 60)?;
    Ok(())
}

fn write_glossary_sheet(sheet: &mut Worksheet) -> Result<(), ReportError> {
    sheet.write(0, 0, "Columna")?;
    sheet.write(0, 1, "Descripción")?;

    for (index, entry) in GLOSSARY.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write(row, 0, entry.column)?;
        sheet.write(row, 1, entry.description)?;
    }

    sheet.set_column_width(0, 25)?;
    sheet.set_column_width(1, 120)?;
    Ok(())
}
