use dioxus::prelude::{use_signal, Signal};

use crate::ui::state::analyzer_state::AnalyzerState;

pub struct AppState {
    pub analyzer: Signal<AnalyzerState>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            analyzer: use_signal(AnalyzerState::default),
            busy: use_signal(|| false),
        }
    }
}
