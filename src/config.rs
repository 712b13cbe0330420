pub const WINDOW_TITLE: &str = "Анализатор продаж";
pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 600.0;

/// Zero-based column holding the sale date/time.
pub const DATE_COLUMN: usize = 5;
/// Zero-based column holding the sale total.
pub const TOTAL_COLUMN: usize = 4;
/// Pattern for date cells stored as text, e.g. `2024-03-07 14:30:00`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where the sales columns live in the first worksheet.
///
/// Column indices are absolute sheet columns (`0` is column A), not offsets
/// into the used range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    pub date_column: usize,
    pub amount_column: usize,
    pub date_format: String,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            date_column: DATE_COLUMN,
            amount_column: TOTAL_COLUMN,
            date_format: DATE_FORMAT.to_string(),
        }
    }
}
