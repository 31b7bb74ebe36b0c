use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdContentCopy};

/// Copies `text` to the clipboard.
#[component]
pub fn CopyTextButton(text: ReadSignal<String>) -> Element {
    let do_copy = move |_| {
        let text = text.read().clone();
        let Some(window) = web_sys::window() else {
            return;
        };
        let _r = window.navigator().clipboard().write_text(&text);
        dioxus::logger::tracing::info!("Query copied to clipboard ({} chars)", text.len());
    };
    rsx! {
        button {
            class: "x-icon-button",
            title: "Copy query",
            onclick: do_copy,
            Icon { icon: MdContentCopy, style: "width: 18px; height: 18px;" }
        }
    }
}
