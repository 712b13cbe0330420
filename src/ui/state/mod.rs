pub mod analyzer_state;
pub mod app_state;
pub mod status;
