use std::path::Path;

use umya_spreadsheet::{Spreadsheet, Worksheet};

use crate::error::CutlistError;
use crate::export::{prepare_output_path, SheetWriter, TemplateLayout, MAX_SHEET_ROW};
use crate::model::{CellValue, OutputRow, PROVIDER_COLUMNS};

/// Spreadsheet backend using umya-spreadsheet, which keeps every cell and
/// style of a template it did not touch.
#[derive(Debug, Clone, Default)]
pub struct XlsxWriter {
    layout: TemplateLayout,
}

impl XlsxWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(layout: TemplateLayout) -> Self {
        XlsxWriter { layout }
    }

    fn write_fresh(&self, rows: &[OutputRow], output: &Path) -> Result<(), CutlistError> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = first_sheet(&mut book)?;

        for (col, header) in (1u32..).zip(PROVIDER_COLUMNS) {
            sheet.get_cell_mut((col, 1)).set_value_string(header);
        }
        for (row_idx, row) in (2u32..).zip(rows) {
            for (col, value) in (1u32..).zip(row.cells()) {
                set_cell(sheet, col, row_idx, &value);
            }
        }

        save(&book, output)
    }

    fn write_into_template(
        &self,
        rows: &[OutputRow],
        output: &Path,
        template: &Path,
    ) -> Result<(), CutlistError> {
        let mut book = umya_spreadsheet::reader::xlsx::read(template).map_err(|e| {
            CutlistError::Spreadsheet(format!(
                "failed to open template {}: {e}",
                template.display()
            ))
        })?;
        let sheet = first_sheet(&mut book)?;

        let columns = self.layout.data_columns();
        for (number, (offset, row)) in (1i64..).zip((0u32..).zip(rows)) {
            let row_idx = self
                .layout
                .start_row
                .checked_add(offset)
                .filter(|r| *r <= MAX_SHEET_ROW)
                .ok_or_else(|| {
                    CutlistError::LayoutInvalid(format!(
                        "{} row(s) starting at row {} run past the last sheet row",
                        rows.len(),
                        self.layout.start_row
                    ))
                })?;
            set_cell(
                sheet,
                self.layout.number_column,
                row_idx,
                &CellValue::Integer(number),
            );
            for (col, value) in columns.iter().zip(row.cells()) {
                set_cell(sheet, *col, row_idx, &value);
            }
        }

        save(&book, output)
    }
}

impl SheetWriter for XlsxWriter {
    fn write_rows(
        &self,
        rows: &[OutputRow],
        output: &Path,
        template: Option<&Path>,
    ) -> Result<(), CutlistError> {
        if rows.is_empty() {
            return Err(CutlistError::NoRows);
        }
        if let Some(template) = template {
            if !template.exists() {
                return Err(CutlistError::TemplateNotFound(template.to_path_buf()));
            }
        }
        prepare_output_path(output)?;

        match template {
            Some(template) => self.write_into_template(rows, output, template)?,
            None => self.write_fresh(rows, output)?,
        }

        log::info!("wrote {} row(s) to {}", rows.len(), output.display());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "umya-spreadsheet"
    }
}

fn first_sheet(book: &mut Spreadsheet) -> Result<&mut Worksheet, CutlistError> {
    book.get_sheet_mut(&0)
        .ok_or_else(|| CutlistError::Spreadsheet("workbook has no worksheet".into()))
}

fn set_cell(sheet: &mut Worksheet, col: u32, row: u32, value: &CellValue) {
    let cell = sheet.get_cell_mut((col, row));
    match value {
        CellValue::Text(s) => {
            cell.set_value_string(s.as_str());
        }
        CellValue::Integer(n) => {
            cell.set_value_number(*n as f64);
        }
    }
}

fn save(book: &Spreadsheet, output: &Path) -> Result<(), CutlistError> {
    umya_spreadsheet::writer::xlsx::write(book, output).map_err(|e| {
        CutlistError::Spreadsheet(format!("failed to write {}: {e}", output.display()))
    })
}
