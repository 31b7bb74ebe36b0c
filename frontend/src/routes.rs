use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::demo_page::DemoPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    DemoPage {},
}
