use std::sync::Arc;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::SheetLayout;
use crate::infra::import::xlsx::XlsxSource;
use crate::ui::components::line_chart::SalesChart;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::import_service::ImportService;

const NONE_OPTION_VALUE: &str = "__none__";

#[component]
pub fn App() -> Element {
    let AppState {
        mut analyzer,
        mut busy,
    } = AppState::new();

    let import_service = use_hook(|| {
        Arc::new(ImportService::new(
            Arc::new(XlsxSource),
            SheetLayout::default(),
        ))
    });

    let state = analyzer();
    let selected_value = state
        .selected_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| NONE_OPTION_VALUE.to_string());

    rsx! {
        div {
            style: "font-family: 'Noto Sans', sans-serif; padding: 12px; background: #fff; min-height: 100vh;",

            div {
                style: "display: flex; gap: 10px; align-items: center; margin-bottom: 10px;",
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .set_title("Открыть файл")
                            .add_filter("Excel Files", &["xlsx"])
                            .pick_file() else {
                            return;
                        };

                        *busy.write() = true;
                        analyzer.write().reset();
                        let result = import_service.load(&file_path);
                        analyzer.write().apply_load(result);
                        *busy.write() = false;
                    },
                    "Загрузить файл"
                }

                select {
                    disabled: busy() || state.years.is_empty(),
                    value: "{selected_value}",
                    onchange: move |event| {
                        analyzer.write().select_year(&event.value());
                    },
                    option { value: NONE_OPTION_VALUE, "Выберите год" }
                    {state.years.iter().map(|year| rsx!(
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: state.selected_year == Some(*year),
                            "{year}"
                        }
                    ))}
                }

                button {
                    disabled: busy(),
                    onclick: move |_| {
                        analyzer.write().analyze();
                    },
                    "Анализировать"
                }
            }

            p {
                style: "margin: 6px 0 10px;",
                "{state.status}"
            }

            SalesChart { series: state.series.clone() }
        }
    }
}
