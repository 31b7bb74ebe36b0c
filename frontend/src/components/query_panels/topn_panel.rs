//! TopN form: most frequent rows of one frame, optionally filtered by a bitmap.

use common::{
    display_format::{format_latency, format_total_rides},
    frames::FrameConfig,
    responses::TopNResponse,
    topn_query::{DEFAULT_TOPN_N, TOPN_COLUMNS, TopNParams},
    render_plan::{ResultView, TableSpec},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_editor_icons::MdFormatListNumbered};

use crate::{
    api::taxi_api::run_topn_query,
    components::{
        error_boundary::ComponentErrorDisplay,
        result_view::{BackendErrorLine, QueryText, ResultViewDisplay, SummaryLine},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::panel_state::{PanelState, use_sequenced_request},
};

#[component]
pub fn TopNPanel(frames: ReadSignal<FrameConfig>) -> Element {
    let mut params = use_signal(TopNParams::default);
    let mut n_text = use_signal(|| DEFAULT_TOPN_N.to_string());
    let request = use_sequenced_request::<TopNResponse>();

    let submit = move || {
        let mut query_params = params.read().clone();
        query_params.n = n_text.read().trim().parse().unwrap_or(DEFAULT_TOPN_N);
        tracing::info!("TopN {:?}", query_params);
        request.run(run_topn_query(query_params));
    };

    let current = params.read().clone();
    let filter_frame = current.filter_frame.clone().unwrap_or_default();
    let filter_row_id = current.filter_row_id.clone().unwrap_or_default();
    let state = request.state.read().clone();
    rsx! {
        section {
            class: "x-panel",
            h2 { "TopN" }
            div {
                class: "x-topn-form",
                label {
                    span { "Frame" }
                    select {
                        value: "{current.frame}",
                        onchange: move |event: Event<FormData>| params.write().frame = event.value(),
                        for frame in frames.read().frames().iter().cloned() {
                            option { key: "{frame.name}", value: "{frame.name}", "{frame.label}" }
                        }
                    }
                }
                label {
                    span { "N" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{n_text}",
                        oninput: move |event: Event<FormData>| n_text.set(event.value()),
                    }
                }
                label {
                    span { "Filter frame" }
                    select {
                        value: "{filter_frame}",
                        onchange: move |event: Event<FormData>| {
                            let value = event.value();
                            params.write().filter_frame = (!value.is_empty()).then_some(value);
                        },
                        option { value: "", "no filter" }
                        for frame in frames.read().frames().iter().cloned() {
                            option { key: "{frame.name}", value: "{frame.name}", "{frame.label}" }
                        }
                    }
                }
                label {
                    span { "Filter row id" }
                    input {
                        r#type: "text",
                        value: "{filter_row_id}",
                        oninput: move |event: Event<FormData>| {
                            let value = event.value();
                            params.write().filter_row_id = (!value.trim().is_empty()).then_some(value);
                        },
                    }
                }
            }
            button {
                class: "x-submit-button",
                onclick: move |_| submit(),
                Icon { icon: MdFormatListNumbered, style: "width: 18px; height: 18px;" }
                "Run TopN"
            }
            {match state {
                PanelState::Idle => rsx! {},
                PanelState::Loading => rsx! { LoadingIndicator {} },
                PanelState::TransportFailed(error_txt) => rsx! { ComponentErrorDisplay { error_txt } },
                PanelState::Loaded(response) => rsx! { TopNResultView { response } },
            }}
        }
    }
}

#[component]
fn TopNResultView(response: ReadSignal<TopNResponse>) -> Element {
    let response = response.read().clone();
    let rows = response.result_rows();
    rsx! {
        div {
            class: "x-results",
            QueryText { query: response.query.clone() }
            SummaryLine { label: "Latency".to_string(), value: format_latency(response.seconds) }
            SummaryLine { label: "Total".to_string(), value: format_total_rides(response.num_profiles) }
            if response.has_error() {
                BackendErrorLine { error: response.error.clone().unwrap_or_default() }
            } else {
                ResultViewDisplay { view: ResultView::with_table(TableSpec::with_columns(TOPN_COLUMNS, &rows), &rows) }
            }
        }
    }
}
