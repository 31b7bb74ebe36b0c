//! Top bar with the demo title and server versions.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_maps_icons::MdLocalTaxi};

use crate::{
    api::taxi_api::get_version_info,
    components::{error_boundary::GlobalErrorBoundary, suspend_boundary::SuspendWrapper},
    routes::Route,
};

/// Shared layout around every page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-topbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    padding: 10px 16px;
                    background-color: #1C212D;
                    color: white;
                ",
                Icon { icon: MdLocalTaxi, style: "width: 28px; height: 28px;" }
                span { style: "font-size: 20px;", "Taxi rides" }
                div { style: "flex-grow: 1;" }
                SuspendWrapper {
                    VersionInfoLabel {}
                }
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn VersionInfoLabel() -> Element {
    let version = use_resource(get_version_info).suspend()?.cloned();
    match version {
        Ok(version) => rsx! {
            div {
                class: "x-version-info",
                style: "font-size: 12px; text-align: right;",
                div { "server: {version.pilosaversion}" }
                div { "demo: {version.demoversion}" }
            }
        },
        Err(e) => {
            tracing::warn!("version info unavailable: {:#?}", e);
            rsx! {
                div { class: "x-version-info", style: "font-size: 12px;", "server: unavailable" }
            }
        }
    }
}
