use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::sheet::SheetRow;

/// File-level failures. These end the load attempt.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("не удалось открыть файл {path}: {message}")]
    Open { path: PathBuf, message: String },
    #[error("в файле {0} нет листов")]
    NoWorksheet(PathBuf),
    #[error("не удалось прочитать лист «{sheet}»: {message}")]
    Worksheet { sheet: String, message: String },
}

/// Produces the rows of the first worksheet of a spreadsheet file.
pub trait SalesSource: Send + Sync {
    fn read_rows(&self, path: &Path) -> Result<Vec<SheetRow>, SourceError>;
}
