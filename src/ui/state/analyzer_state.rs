use tracing::error;

use crate::domain::entities::sales::{LoadReport, MonthlySeries, SalesAggregate};
use crate::ui::state::status::{load_failed, load_succeeded, INITIAL_STATUS};
use crate::usecase::ports::source::SourceError;
use crate::usecase::services::query_service::analyze;

/// Everything the window shows, independent of dioxus signals.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerState {
    pub aggregate: SalesAggregate,
    pub years: Vec<i32>,
    pub selected_year: Option<i32>,
    pub series: Option<MonthlySeries>,
    pub status: String,
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self {
            aggregate: SalesAggregate::default(),
            years: Vec::new(),
            selected_year: None,
            series: None,
            status: INITIAL_STATUS.to_string(),
        }
    }
}

impl AnalyzerState {
    /// Drop the previous file's data before a new load attempt.
    pub fn reset(&mut self) {
        self.aggregate.clear();
        self.years.clear();
        self.selected_year = None;
        self.series = None;
    }

    pub fn apply_load(&mut self, result: Result<LoadReport, SourceError>) {
        self.reset();
        match result {
            Ok(report) => {
                self.status = load_succeeded(&report);
                self.years = report.years();
                self.aggregate = report.aggregate;
            }
            Err(err) => {
                error!("failed to load workbook: {err}");
                self.status = load_failed(&err);
            }
        }
    }

    /// Take the raw `<select>` value; anything that is not a loaded year clears the choice.
    pub fn select_year(&mut self, value: &str) {
        self.selected_year = value
            .parse::<i32>()
            .ok()
            .filter(|year| self.years.contains(year));
    }

    /// Redraw for the selected year, or explain in the status line why not.
    pub fn analyze(&mut self) {
        match analyze(&self.aggregate, self.selected_year) {
            Ok(series) => self.series = Some(series),
            Err(err) => self.status = err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn loaded_report() -> LoadReport {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2023, 12, 25.5);
        aggregate.add(2024, 1, 150.0);
        aggregate.add(2024, 2, 30.0);
        LoadReport {
            aggregate,
            processed_rows: 4,
            skipped_rows: 2,
        }
    }

    #[test]
    fn successful_load_lists_years_and_counts() {
        let mut state = AnalyzerState::default();

        state.apply_load(Ok(loaded_report()));

        assert_eq!(state.years, vec![2023, 2024]);
        assert_eq!(state.status, "Файл загружен. Обработано строк: 4, лет: 2.");
        assert_eq!(state.selected_year, None);
    }

    #[test]
    fn failed_load_leaves_state_cleared() {
        let mut state = AnalyzerState::default();
        state.apply_load(Ok(loaded_report()));
        state.select_year("2024");
        state.analyze();
        assert!(state.series.is_some());

        state.apply_load(Err(SourceError::NoWorksheet(PathBuf::from("empty.xlsx"))));

        assert!(state.aggregate.is_empty(), "no partial aggregate should survive");
        assert!(state.years.is_empty());
        assert_eq!(state.series, None);
        assert!(
            state.status.starts_with("Ошибка загрузки файла: "),
            "unexpected status: {}",
            state.status
        );
    }

    #[test]
    fn analyze_without_year_keeps_the_chart() {
        let mut state = AnalyzerState::default();
        state.apply_load(Ok(loaded_report()));
        state.select_year("2023");
        state.analyze();
        let before = state.series.clone();

        state.select_year("");
        state.analyze();

        assert_eq!(state.status, "Выберите год для анализа");
        assert_eq!(state.series, before, "chart should not change");
    }

    #[test]
    fn select_year_ignores_years_not_loaded() {
        let mut state = AnalyzerState::default();
        state.apply_load(Ok(loaded_report()));

        state.select_year("1999");
        assert_eq!(state.selected_year, None);

        state.select_year("2024");
        assert_eq!(state.selected_year, Some(2024));
    }

    #[test]
    fn analyze_projects_the_selected_year() {
        let mut state = AnalyzerState::default();
        state.apply_load(Ok(loaded_report()));
        state.select_year("2024");

        state.analyze();

        let series = state.series.expect("series should be drawn");
        assert_eq!(series.year, 2024);
        assert_eq!(series.points[0].value, 150.0);
        assert_eq!(series.points[1].value, 30.0);
        assert!(series.points[2..].iter().all(|p| p.value == 0.0));
    }
}
