use dioxus::prelude::*;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                LoadingIndicator {}
            },
            {children}
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "color:black; font-size: 16px; border: 1px solid #999; padding: 6px 10px; border-radius: 5px; margin: 8px 0px; display: inline-block;",
            "Loading..."
        }
    }
}
