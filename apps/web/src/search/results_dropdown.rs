//! Results dropdown under the search input.

use dioxus::prelude::*;
use holocron_core::dom;

use crate::state::*;

#[component]
pub fn ResultsDropdown() -> Element {
    let search = SEARCH.read();
    let dropdown = search.dropdown();

    rsx! {
        ul {
            id: dom::RESULTS_DROPDOWN,
            class: "dropdown-menu",
            style: if dropdown.is_visible() { "display: block" } else { "display: none" },
            for (i, item) in dropdown.items().iter().enumerate() {
                li {
                    key: "{i}-{item.href}",
                    class: "dropdown-item",
                    a {
                        class: "dropdown-list-item",
                        href: "{item.href}",
                        "{item.label}"
                    }
                }
            }
        }
    }
}
