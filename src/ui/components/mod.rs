pub mod line_chart;
