use crate::domain::entities::sales::LoadReport;
use crate::usecase::ports::source::SourceError;

pub const INITIAL_STATUS: &str = "Загрузите файл";

pub fn load_succeeded(report: &LoadReport) -> String {
    format!(
        "Файл загружен. Обработано строк: {}, лет: {}.",
        report.processed_rows,
        report.years().len()
    )
}

pub fn load_failed(err: &SourceError) -> String {
    format!("Ошибка загрузки файла: {err}")
}
