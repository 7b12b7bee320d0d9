//! Search widget — reveal toggle, live search input and results dropdown.

mod results_dropdown;
mod search_button;
mod search_input;

use std::rc::Rc;

use dioxus::prelude::*;
use holocron_core::{dom, ToggleEffect};
use tracing::warn;

use crate::state::*;
use results_dropdown::ResultsDropdown;
use search_button::SearchButton;
use search_input::SearchInput;

/// The `search-form` element. Its `active` class is rendered from [`TOGGLE`],
/// never read back.
#[component]
pub fn SearchForm() -> Element {
    let mut input_el = use_signal(|| None::<Rc<MountedData>>);
    let toggle = *TOGGLE.read();

    rsx! {
        form {
            id: dom::SEARCH_FORM,
            class: toggle.form_class(),
            role: "search",
            onclick: move |_| CLICK_PATH.write().enter(dom::SEARCH_FORM),

            SearchInput {
                onmounted: move |e: MountedEvent| input_el.set(Some(e.data())),
            }

            SearchButton {
                onpress: move |_| {
                    let effect = TOGGLE.write().press();
                    match effect {
                        ToggleEffect::Reveal => {
                            let Some(el) = input_el.read().clone() else { return };
                            spawn(async move {
                                if let Err(e) = el.set_focus(true).await {
                                    warn!(error = ?e, "Could not focus search input");
                                }
                            });
                        }
                        ToggleEffect::Submit => submit_form(),
                    }
                },
            }

            ResultsDropdown {}
        }
    }
}

/// Native form submission; the page behind the form's target takes over.
fn submit_form() {
    let js = format!("document.getElementById({:?}).submit();", dom::SEARCH_FORM);
    spawn(async move {
        if let Err(e) = document::eval(&js).await {
            warn!(error = ?e, "Could not submit search form");
        }
    });
}
