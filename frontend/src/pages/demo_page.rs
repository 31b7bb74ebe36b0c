use common::frames::FrameConfig;
use dioxus::prelude::*;

use crate::components::query_panels::{
    intersect_panel::IntersectPanel, predefined_panel::PredefinedPanel, topn_panel::TopNPanel,
};

/// Single page demo: the intersect form, the TopN form and the predefined queries.
#[component]
pub fn DemoPage() -> Element {
    let frames = use_hook(FrameConfig::taxi_default);
    rsx! {
        document::Title { "Taxi rides" }
        div {
            class: "x-demo-page",
            IntersectPanel { frames: frames.clone() }
            TopNPanel { frames }
            PredefinedPanel {}
        }
    }
}
