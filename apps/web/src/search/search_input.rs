//! Query input — every input event goes straight to the live search controller.

use dioxus::prelude::*;
use holocron_core::{dom, InputOutcome};

use crate::state::*;

#[component]
pub fn SearchInput(onmounted: EventHandler<MountedEvent>) -> Element {
    rsx! {
        input {
            id: dom::SEARCH_INPUT,
            class: "search-input",
            r#type: "text",
            name: "query",
            placeholder: "Search the galaxy...",
            autocomplete: "off",
            onmounted: move |e| onmounted.call(e),
            oninput: move |e: Event<FormData>| {
                let outcome = SEARCH.write().on_input(&e.value());
                let InputOutcome::Fetch(ticket) = outcome else { return };

                // No debounce and no cancellation: stale replies are dropped by the controller
                spawn(async move {
                    let client = search_client().await;
                    let result = client.fetch(ticket.query()).await;
                    SEARCH.write().apply(&ticket, result);
                });
            },
        }
    }
}
