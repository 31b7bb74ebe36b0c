//! Intersect form: row ids per frame, counted under one `Intersect`.

use std::collections::BTreeMap;

use common::{
    display_format::{format_latency, format_rides, format_total_rides},
    frames::{FrameConfig, FrameSpec},
    intersect_query::{Selection, build_intersect_query},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{
    api::taxi_api::run_intersect_query,
    components::{
        error_boundary::ComponentErrorDisplay,
        result_view::{BackendErrorLine, QueryText, SummaryLine},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::panel_state::{IntersectOutcome, PanelState, use_sequenced_request},
};

#[component]
pub fn IntersectPanel(frames: ReadSignal<FrameConfig>) -> Element {
    let fields = use_signal(BTreeMap::<String, String>::new);
    let request = use_sequenced_request::<IntersectOutcome>();

    let submit = move || {
        let selection = Selection::from_text_fields(fields.read().iter());
        let query = build_intersect_query(&frames.read(), &selection);
        if query.is_empty() {
            tracing::info!("No query.");
            return;
        }
        tracing::info!("Q {}", query);
        request.run(async move {
            let response = run_intersect_query(query.clone()).await?;
            Ok(IntersectOutcome { query, response })
        });
    };

    let state = request.state.read().clone();
    rsx! {
        section {
            class: "x-panel",
            h2 { "Intersect" }
            div {
                class: "x-frame-grid",
                for frame in frames.read().frames().iter().cloned() {
                    FrameInput {
                        key: "{frame.name}",
                        frame,
                        fields,
                        on_enter: move |_: ()| submit(),
                    }
                }
            }
            button {
                class: "x-submit-button",
                onclick: move |_| submit(),
                Icon { icon: MdSearch, style: "width: 18px; height: 18px;" }
                "Count rides"
            }
            {match state {
                PanelState::Idle => rsx! {},
                PanelState::Loading => rsx! { LoadingIndicator {} },
                PanelState::TransportFailed(error_txt) => rsx! { ComponentErrorDisplay { error_txt } },
                PanelState::Loaded(outcome) => rsx! { IntersectResultView { outcome } },
            }}
        }
    }
}

#[component]
fn FrameInput(frame: ReadSignal<FrameSpec>, mut fields: Signal<BTreeMap<String, String>>, on_enter: Callback<()>) -> Element {
    let FrameSpec { name, label } = frame.read().clone();
    let value = fields.read().get(&name).cloned().unwrap_or_default();
    rsx! {
        label {
            class: "x-frame-input",
            span { "{label}" }
            input {
                r#type: "text",
                placeholder: "row ids, e.g. 1, 2",
                value: "{value}",
                oninput: move |event: Event<FormData>| {
                    fields.write().insert(frame.read().name.clone(), event.value());
                },
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        on_enter.call(());
                    }
                },
            }
        }
    }
}

/// Query text, latency and totals are shown even when the backend reported an
/// error; only the match count is withheld.
#[component]
fn IntersectResultView(outcome: ReadSignal<IntersectOutcome>) -> Element {
    let IntersectOutcome { query, response } = outcome.read().clone();
    rsx! {
        div {
            class: "x-results",
            QueryText { query }
            SummaryLine { label: "Latency".to_string(), value: format_latency(response.seconds) }
            SummaryLine { label: "Total".to_string(), value: format_total_rides(response.num_profiles) }
            if response.has_error() {
                BackendErrorLine { error: response.error.clone().unwrap_or_default() }
            } else {
                div {
                    class: "x-intersect-results",
                    SummaryLine {
                        label: "Matching".to_string(),
                        value: response.count().map(format_rides).unwrap_or_default(),
                    }
                }
            }
        }
    }
}
