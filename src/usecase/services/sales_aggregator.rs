use std::num::ParseFloatError;

use calamine::{Data, DataType};
use chrono::{Datelike, NaiveDateTime};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SheetLayout;
use crate::domain::entities::sales::LoadReport;
use crate::domain::entities::sheet::SheetRow;

/// Why a single row was left out of the aggregate.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("date cell is empty")]
    MissingDate,
    #[error("cannot parse date {text:?}: {source}")]
    InvalidDate {
        text: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("date cell holds {0}")]
    UnsupportedDateCell(String),
    #[error("amount cell is empty")]
    MissingAmount,
    #[error("cannot parse amount {text:?}: {source}")]
    InvalidAmount {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("amount cell holds {0}")]
    UnsupportedAmountCell(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sale {
    pub at: NaiveDateTime,
    pub amount: f64,
}

pub fn parse_sale(row: &SheetRow, layout: &SheetLayout) -> Result<Sale, RowError> {
    let date_cell = row
        .cell(layout.date_column)
        .ok_or(RowError::MissingDate)?;
    let at = parse_sale_datetime(date_cell, &layout.date_format)?;

    let amount_cell = row
        .cell(layout.amount_column)
        .ok_or(RowError::MissingAmount)?;
    let amount = parse_amount(amount_cell)?;

    Ok(Sale { at, amount })
}

/// Date-backed and numeric cells are Excel serials in local wall-clock time;
/// text cells must match `format` after trimming.
pub fn parse_sale_datetime(cell: &Data, format: &str) -> Result<NaiveDateTime, RowError> {
    match cell {
        Data::String(text) => {
            let text = text.trim();
            NaiveDateTime::parse_from_str(text, format).map_err(|source| RowError::InvalidDate {
                text: text.to_string(),
                source,
            })
        }
        Data::Int(serial) => Data::Float(*serial as f64)
            .as_datetime()
            .ok_or_else(|| RowError::UnsupportedDateCell(format!("{cell:?}"))),
        Data::Float(_) | Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .ok_or_else(|| RowError::UnsupportedDateCell(format!("{cell:?}"))),
        other => Err(RowError::UnsupportedDateCell(format!("{other:?}"))),
    }
}

pub fn parse_amount(cell: &Data) -> Result<f64, RowError> {
    match cell {
        Data::Float(value) => Ok(*value),
        Data::Int(value) => Ok(*value as f64),
        // A date-formatted number is still a number.
        Data::DateTime(_) => cell
            .as_f64()
            .ok_or_else(|| RowError::UnsupportedAmountCell(format!("{cell:?}"))),
        Data::String(text) => {
            let text = text.trim();
            text.parse::<f64>()
                .map_err(|source| RowError::InvalidAmount {
                    text: text.to_string(),
                    source,
                })
        }
        Data::Empty => Err(RowError::MissingAmount),
        other => Err(RowError::UnsupportedAmountCell(format!("{other:?}"))),
    }
}

/// Sum sale amounts by year and month, skipping the header row.
///
/// Bad rows are logged and counted in `skipped_rows`; they never stop the scan.
pub fn aggregate_rows<'a, I>(rows: I, layout: &SheetLayout) -> LoadReport
where
    I: IntoIterator<Item = &'a SheetRow>,
{
    let mut report = LoadReport::default();

    for row in rows.into_iter().skip(1) {
        match parse_sale(row, layout) {
            Ok(sale) => {
                report
                    .aggregate
                    .add(sale.at.year(), sale.at.month(), sale.amount);
                report.processed_rows += 1;
            }
            Err(RowError::MissingDate) => {
                debug!(row = row.number, "skipping row without a date");
                report.skipped_rows += 1;
            }
            Err(err) => {
                warn!(row = row.number, "failed to process row: {err}");
                report.skipped_rows += 1;
            }
        }
    }

    report
}
