use calamine::Data;

/// One worksheet row, cells aligned so index 0 is column A.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number as shown by spreadsheet apps.
    pub number: usize,
    pub cells: Vec<Data>,
}

impl SheetRow {
    pub fn new(number: usize, cells: Vec<Data>) -> Self {
        Self { number, cells }
    }

    /// Cell at `col_idx`, `None` when the row has no value there.
    pub fn cell(&self, col_idx: usize) -> Option<&Data> {
        self.cells
            .get(col_idx)
            .filter(|cell| !matches!(cell, Data::Empty))
    }
}
