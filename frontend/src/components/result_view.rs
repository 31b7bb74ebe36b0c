//! Draws render plans: summary lines, result tables and histogram charts.

use common::{
    chart_layout::{CHART_HEIGHT, CHART_PADDING, CHART_WIDTH, layout_bars, layout_points},
    render_plan::{ChartSpec, HeatPoint, HistogramBar, ResultView, TableSpec},
};
use dioxus::prelude::*;

use crate::components::copy_button::CopyTextButton;

/// Query text with a copy button.
#[component]
pub fn QueryText(query: ReadSignal<String>) -> Element {
    rsx! {
        div {
            class: "x-result-query",
            pre { "{query}" }
            CopyTextButton { text: query }
        }
    }
}

/// One `label: value` summary line (latency, totals, description).
#[component]
pub fn SummaryLine(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "x-summary-line",
            span { class: "x-summary-label", "{label}" }
            span { class: "x-summary-value", "{value}" }
        }
    }
}

#[component]
pub fn BackendErrorLine(error: String) -> Element {
    rsx! {
        div {
            class: "x-backend-error",
            "Query error: {error}"
        }
    }
}

#[component]
pub fn ResultTable(table: ReadSignal<TableSpec>) -> Element {
    let TableSpec { header, body } = table.read().clone();
    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    for (i, key) in header.into_iter().enumerate() {
                        th { key: "{i}", "{key}" }
                    }
                }
            }
            tbody {
                for (i, row) in body.into_iter().enumerate() {
                    tr {
                        key: "{i}",
                        for (j, cell) in row.into_iter().enumerate() {
                            td { key: "{j}", "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Histogram1DChart(xkey: String, bars: Vec<HistogramBar>) -> Element {
    let rects = layout_bars(&bars);
    let baseline = CHART_HEIGHT - CHART_PADDING;
    let label_y = baseline + 14.0;
    rsx! {
        div {
            class: "x-chart-title",
            "count by {xkey}"
        }
        svg {
            width: "{CHART_WIDTH}",
            height: "{CHART_HEIGHT}",
            for (i, bar) in rects.into_iter().enumerate() {
                g {
                    key: "{i}",
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        style: "fill: #367ED8;",
                    }
                    text {
                        x: "{bar.x}",
                        y: "{label_y}",
                        style: "font-size: 10px; fill: #333;",
                        "{bar.label}"
                    }
                    text {
                        x: "{bar.x}",
                        y: "{bar.value_y}",
                        style: "font-size: 9px; fill: #555;",
                        "{bar.count}"
                    }
                }
            }
        }
    }
}

#[component]
fn Histogram2DChart(points: Vec<HeatPoint>) -> Element {
    let marks = layout_points(&points);
    rsx! {
        div {
            class: "x-chart-title",
            "count by (x, y)"
        }
        svg {
            width: "{CHART_WIDTH}",
            height: "{CHART_HEIGHT}",
            for (i, mark) in marks.into_iter().enumerate() {
                circle {
                    key: "{i}",
                    cx: "{mark.cx}",
                    cy: "{mark.cy}",
                    r: "{mark.r}",
                    style: "fill: #D8367E; opacity: {mark.opacity};",
                }
            }
        }
    }
}

#[component]
pub fn HistogramChart(chart: ReadSignal<ChartSpec>) -> Element {
    let chart = chart.read().clone();
    match chart {
        ChartSpec::Histogram1D { xkey, bars } => rsx! { Histogram1DChart { xkey, bars } },
        ChartSpec::Histogram2D { points } => rsx! { Histogram2DChart { points } },
    }
}

/// Table plus optional chart. Each new view replaces the previous drawing.
#[component]
pub fn ResultViewDisplay(view: ReadSignal<ResultView>) -> Element {
    let ResultView { table, chart } = view.read().clone();
    rsx! {
        div {
            class: "x-result-view",
            div {
                class: "x-result-table",
                ResultTable { table }
            }
            if let Some(chart) = chart {
                div {
                    class: "x-plot-container",
                    HistogramChart { chart }
                }
            }
        }
    }
}
