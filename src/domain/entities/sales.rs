use std::collections::BTreeMap;

/// Sale totals grouped by year, then month (1-12).
///
/// A year or month key only exists once some row contributed to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesAggregate {
    by_year: BTreeMap<i32, BTreeMap<u32, f64>>,
}

impl SalesAggregate {
    pub fn add(&mut self, year: i32, month: u32, amount: f64) {
        *self
            .by_year
            .entry(year)
            .or_default()
            .entry(month)
            .or_insert(0.0) += amount;
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    pub fn total(&self, year: i32, month: u32) -> Option<f64> {
        self.by_year
            .get(&year)
            .and_then(|months| months.get(&month))
            .copied()
    }

    pub fn has_data_for(&self, year: i32) -> bool {
        self.by_year
            .get(&year)
            .is_some_and(|months| !months.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_year.clear();
    }
}

/// Outcome of scanning one worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub aggregate: SalesAggregate,
    pub processed_rows: usize,
    pub skipped_rows: usize,
}

impl LoadReport {
    pub fn years(&self) -> Vec<i32> {
        self.aggregate.years()
    }
}

const MONTH_NAMES: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Display name for `month`; anything outside 1-12 is blank.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub month: u32,
    pub label: &'static str,
    pub value: f64,
}

/// Twelve monthly points for one year, January first.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    pub year: i32,
    pub points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| point.value)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_per_year_and_month() {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2024, 1, 100.0);
        aggregate.add(2024, 1, 50.0);
        aggregate.add(2024, 2, 30.0);
        aggregate.add(2023, 12, 5.5);

        assert_eq!(aggregate.total(2024, 1), Some(150.0));
        assert_eq!(aggregate.total(2024, 2), Some(30.0));
        assert_eq!(aggregate.total(2023, 12), Some(5.5));
        assert_eq!(aggregate.total(2024, 3), None, "untouched months stay absent");
        assert_eq!(aggregate.years(), vec![2023, 2024], "years should be ascending");
    }

    #[test]
    fn clear_drops_every_year() {
        let mut aggregate = SalesAggregate::default();
        aggregate.add(2022, 6, 1.0);
        aggregate.clear();

        assert!(aggregate.is_empty());
        assert!(!aggregate.has_data_for(2022));
    }

    #[test]
    fn month_name_covers_calendar_and_blanks_the_rest() {
        assert_eq!(month_name(1), "Январь");
        assert_eq!(month_name(12), "Декабрь");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }
}
