//! Search button — reveals the input on first press, submits afterwards.

use dioxus::prelude::*;
use holocron_core::dom;

use crate::state::*;

#[component]
pub fn SearchButton(onpress: EventHandler<()>) -> Element {
    let toggle = *TOGGLE.read();

    rsx! {
        button {
            id: dom::SEARCH_BUTTON,
            class: "search-button",
            r#type: "button",
            aria_label: "Search",
            style: if toggle.button_visible() { "" } else { "display: none" },
            onclick: move |_| onpress.call(()),
            svg {
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }
        }
    }
}
