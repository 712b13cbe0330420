use dioxus::prelude::*;

use crate::domain::entities::sales::{month_name, MonthlySeries};

pub const CHART_WIDTH: f64 = 760.0;
pub const CHART_HEIGHT: f64 = 440.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const TARGET_TICKS: f64 = 5.0;

const CHART_TITLE: &str = "График продаж по месяцам";
const X_AXIS_LABEL: &str = "Месяц";
const Y_AXIS_LABEL: &str = "Прибыль";

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub month: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub points: Vec<PlotPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl ChartGeometry {
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|point| format!("{:.1},{:.1}", point.x, point.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Round `raw` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powi(raw.log10().floor() as i32);
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Tick values from zero up to the first step at or above `max`.
pub fn value_ticks(max: f64) -> Vec<f64> {
    let max = if max.is_finite() && max > 0.0 { max } else { 1.0 };
    let step = nice_step(max / TARGET_TICKS);
    let count = (max / step - 1e-9).ceil().max(1.0) as usize;
    (0..=count).map(|idx| idx as f64 * step).collect()
}

pub fn format_axis_value(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.fract().abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let mut text = format!("{value:.2}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

/// Lay out the chart in SVG coordinates; months sit in the middle of 12 equal slots.
pub fn layout_chart(series: Option<&MonthlySeries>, width: f64, height: f64) -> ChartGeometry {
    let plot_left = MARGIN_LEFT;
    let plot_right = width - MARGIN_RIGHT;
    let plot_top = MARGIN_TOP;
    let plot_bottom = height - MARGIN_BOTTOM;
    let plot_width = plot_right - plot_left;
    let plot_height = plot_bottom - plot_top;
    let slot = plot_width / 12.0;

    let tick_values = value_ticks(series.map(MonthlySeries::max_value).unwrap_or(0.0));
    let top_value = tick_values.last().copied().unwrap_or(1.0);
    let to_y = |value: f64| plot_bottom - plot_height * (value / top_value);
    let to_x = |idx: usize| plot_left + slot * (idx as f64 + 0.5);

    let x_ticks = (1..=12)
        .map(|month| AxisTick {
            position: to_x(month as usize - 1),
            label: month_name(month).to_string(),
        })
        .collect();

    let y_ticks = tick_values
        .iter()
        .map(|value| AxisTick {
            position: to_y(*value),
            label: format_axis_value(*value),
        })
        .collect();

    let points = series
        .map(|series| {
            series
                .points
                .iter()
                .enumerate()
                .map(|(idx, point)| PlotPoint {
                    month: point.month,
                    x: to_x(idx),
                    y: to_y(point.value),
                })
                .collect()
        })
        .unwrap_or_default();

    ChartGeometry {
        width,
        height,
        plot_left,
        plot_right,
        plot_top,
        plot_bottom,
        points,
        x_ticks,
        y_ticks,
    }
}

#[component]
pub fn SalesChart(#[props(!optional)] series: Option<MonthlySeries>) -> Element {
    let geometry = layout_chart(series.as_ref(), CHART_WIDTH, CHART_HEIGHT);
    let polyline = geometry.polyline();
    let center_x = (geometry.plot_left + geometry.plot_right) / 2.0;
    let center_y = (geometry.plot_top + geometry.plot_bottom) / 2.0;
    let title_x = geometry.width / 2.0;
    let value_label_x = geometry.plot_left - 8.0;
    let month_label_y = geometry.plot_bottom + 18.0;
    let axis_title_y = geometry.height - 16.0;
    let legend_y = geometry.plot_top - 8.0;
    let legend = series
        .as_ref()
        .map(|series| format!("{} год", series.year))
        .unwrap_or_default();

    rsx! {
        svg {
            width: "{geometry.width}",
            height: "{geometry.height}",
            view_box: "0 0 {geometry.width} {geometry.height}",
            style: "background: #fff; border: 1px solid #ddd; border-radius: 6px;",

            text {
                x: "{title_x}",
                y: "24",
                text_anchor: "middle",
                font_size: "16",
                "{CHART_TITLE}"
            }

            {geometry.y_ticks.iter().map(|tick| {
                let label_y = tick.position + 4.0;
                rsx!(
                    g {
                        key: "y-{tick.label}",
                        line {
                            x1: "{geometry.plot_left}",
                            y1: "{tick.position}",
                            x2: "{geometry.plot_right}",
                            y2: "{tick.position}",
                            stroke: "#eee",
                        }
                        text {
                            x: "{value_label_x}",
                            y: "{label_y}",
                            text_anchor: "end",
                            font_size: "11",
                            "{tick.label}"
                        }
                    }
                )
            })}

            {geometry.x_ticks.iter().map(|tick| rsx!(
                text {
                    key: "x-{tick.label}",
                    x: "{tick.position}",
                    y: "{month_label_y}",
                    text_anchor: "middle",
                    font_size: "11",
                    "{tick.label}"
                }
            ))}

            line {
                x1: "{geometry.plot_left}",
                y1: "{geometry.plot_bottom}",
                x2: "{geometry.plot_right}",
                y2: "{geometry.plot_bottom}",
                stroke: "#333",
            }
            line {
                x1: "{geometry.plot_left}",
                y1: "{geometry.plot_top}",
                x2: "{geometry.plot_left}",
                y2: "{geometry.plot_bottom}",
                stroke: "#333",
            }

            text {
                x: "{center_x}",
                y: "{axis_title_y}",
                text_anchor: "middle",
                font_size: "13",
                "{X_AXIS_LABEL}"
            }
            text {
                x: "18",
                y: "{center_y}",
                text_anchor: "middle",
                font_size: "13",
                transform: "rotate(-90 18 {center_y})",
                "{Y_AXIS_LABEL}"
            }

            if !geometry.points.is_empty() {
                polyline {
                    points: "{polyline}",
                    fill: "none",
                    stroke: "#1f77b4",
                    stroke_width: "2",
                }
                {geometry.points.iter().map(|point| rsx!(
                    circle {
                        key: "{point.month}",
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "3.5",
                        fill: "#1f77b4",
                    }
                ))}
                text {
                    x: "{geometry.plot_right}",
                    y: "{legend_y}",
                    text_anchor: "end",
                    font_size: "12",
                    fill: "#1f77b4",
                    "{legend}"
                }
            }
        }
    }
}
