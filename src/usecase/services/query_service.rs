use thiserror::Error;

use crate::domain::entities::sales::{month_name, MonthlySeries, SalesAggregate, SeriesPoint};

/// Why the analyze action left the chart alone. The text is shown as status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    #[error("Выберите год для анализа")]
    NoYearSelected,
    #[error("Нет данных для выбранного года")]
    NoDataForYear(i32),
}

/// Twelve points for `year`, zero for months without sales.
pub fn project_series(aggregate: &SalesAggregate, year: i32) -> MonthlySeries {
    let points = (1..=12)
        .map(|month| SeriesPoint {
            month,
            label: month_name(month),
            value: aggregate.total(year, month).unwrap_or(0.0),
        })
        .collect();
    MonthlySeries { year, points }
}

pub fn analyze(
    aggregate: &SalesAggregate,
    selected_year: Option<i32>,
) -> Result<MonthlySeries, AnalyzeError> {
    let year = selected_year.ok_or(AnalyzeError::NoYearSelected)?;
    if !aggregate.has_data_for(year) {
        return Err(AnalyzeError::NoDataForYear(year));
    }
    Ok(project_series(aggregate, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_fills_missing_months_with_zero() {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2024, 3, 10.0);
        aggregate.add(2024, 11, 4.25);

        let series = project_series(&aggregate, 2024);

        assert_eq!(series.points.len(), 12);
        let months: Vec<u32> = series.points.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>(), "points should be in calendar order");
        for point in &series.points {
            let expected = match point.month {
                3 => 10.0,
                11 => 4.25,
                _ => 0.0,
            };
            assert_eq!(point.value, expected, "month {}", point.month);
        }
        assert_eq!(series.points[2].label, "Март");
    }

    #[test]
    fn analyze_without_selection_asks_for_a_year() {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2024, 1, 1.0);

        let err = analyze(&aggregate, None).expect_err("no year selected");

        assert_eq!(err, AnalyzeError::NoYearSelected);
        assert_eq!(err.to_string(), "Выберите год для анализа");
    }

    #[test]
    fn analyze_unknown_year_reports_no_data() {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2024, 1, 1.0);

        let err = analyze(&aggregate, Some(2019)).expect_err("2019 has no rows");

        assert_eq!(err, AnalyzeError::NoDataForYear(2019));
        assert_eq!(err.to_string(), "Нет данных для выбранного года");
    }
}
