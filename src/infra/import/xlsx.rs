use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::domain::entities::sheet::SheetRow;
use crate::usecase::ports::source::{SalesSource, SourceError};

/// Reads the first worksheet of an Excel workbook through calamine.
///
/// Formula cells come back as the value cached in the file at save time.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxSource;

impl SalesSource for XlsxSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<SheetRow>, SourceError> {
        read_first_sheet_rows(path)
    }
}

pub fn read_first_sheet_rows(path: &Path) -> Result<Vec<SheetRow>, SourceError> {
    let mut workbook = open_workbook_auto(path).map_err(|err| SourceError::Open {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SourceError::NoWorksheet(path.to_path_buf()))?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|err| SourceError::Worksheet {
            sheet: first_sheet.clone(),
            message: err.to_string(),
        })?;

    // The used range may start past A1; pad so column indices stay absolute.
    let Some((start_row, start_col)) = range.start() else {
        debug!(sheet = %first_sheet, "worksheet is empty");
        return Ok(Vec::new());
    };
    let lead = start_col as usize;

    let rows: Vec<SheetRow> = range
        .rows()
        .enumerate()
        .map(|(offset, cells)| {
            let mut aligned = Vec::with_capacity(lead + cells.len());
            aligned.resize(lead, Data::Empty);
            aligned.extend(cells.iter().cloned());
            SheetRow::new(start_row as usize + offset + 1, aligned)
        })
        .collect();

    debug!(sheet = %first_sheet, rows = rows.len(), "read worksheet");
    Ok(rows)
}
