//! Buttons for the canned queries; results go through the generic renderer.

use common::{
    display_format::{format_latency, format_total_rides},
    predefined::PredefinedQuery,
    render_plan::ResultView,
    responses::PredefinedResponse,
};
use dioxus::{logger::tracing, prelude::*};

use crate::{
    api::taxi_api::run_predefined_query,
    components::{
        error_boundary::ComponentErrorDisplay,
        result_view::{BackendErrorLine, ResultViewDisplay, SummaryLine},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::panel_state::{PanelState, use_sequenced_request},
};

#[component]
pub fn PredefinedPanel() -> Element {
    let request = use_sequenced_request::<PredefinedResponse>();
    let state = request.state.read().clone();
    rsx! {
        section {
            class: "x-panel",
            h2 { "Predefined queries" }
            div {
                class: "x-predefined-buttons",
                for query in PredefinedQuery::ALL {
                    button {
                        key: "{query.id()}",
                        class: "x-predefined-button",
                        title: "{query.description()}",
                        onclick: move |_| {
                            tracing::info!("predefined query {}", query.id());
                            request.run(run_predefined_query(query.id()));
                        },
                        "{query.id()}. {query.short_label()}"
                    }
                }
            }
            {match state {
                PanelState::Idle => rsx! {},
                PanelState::Loading => rsx! { LoadingIndicator {} },
                PanelState::TransportFailed(error_txt) => rsx! { ComponentErrorDisplay { error_txt } },
                PanelState::Loaded(response) => rsx! { PredefinedResultView { response } },
            }}
        }
    }
}

#[component]
fn PredefinedResultView(response: ReadSignal<PredefinedResponse>) -> Element {
    let response = response.read().clone();
    rsx! {
        div {
            class: "x-results",
            SummaryLine { label: "Query".to_string(), value: response.description.clone() }
            SummaryLine { label: "Latency".to_string(), value: format_latency(response.seconds) }
            SummaryLine { label: "Total".to_string(), value: format_total_rides(response.num_profiles) }
            if let Some(threshold) = response.percentage_threshold {
                SummaryLine { label: "Coverage".to_string(), value: format!("{threshold}%") }
            }
            if response.has_error() {
                BackendErrorLine { error: response.error.clone().unwrap_or_default() }
            } else {
                ResultViewDisplay { view: ResultView::from_rows(&response.rows) }
            }
        }
    }
}
