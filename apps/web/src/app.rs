//! Root application component — page header with the search widget.

use dioxus::prelude::*;
use holocron_core::dismiss::{dismiss_outside, ElementRegion};
use holocron_core::dom;

use crate::search::SearchForm;
use crate::state::*;

static SEARCH_CSS: Asset = asset!("/assets/styles/search.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: SEARCH_CSS }

        div {
            class: "app-shell",

            // Runs after any handler on the search form, which records itself
            // on the click path while the event bubbles.
            onclick: move |_| {
                let path = CLICK_PATH.write().take();
                let form = ElementRegion { id: dom::SEARCH_FORM };
                dismiss_outside(&form, &path, || SEARCH.write());
            },

            header {
                class: "navbar",
                a { class: "navbar-brand", href: "/", "Holocron" }
                SearchForm {}
            }

            main {
                class: "page-content",
                p { "Search people, films, starships, vehicles, planets and species." }
            }
        }
    }
}
