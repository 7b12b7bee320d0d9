//! Global widget state using Dioxus signals.

use dioxus::prelude::*;
use holocron_core::dismiss::ClickPath;
use holocron_core::{LiveSearch, RevealToggle, SearchConfig};
use holocron_http::SearchClient;
use tracing::{debug, error};

/// Base URL of the site serving `/search`, fixed at build time.
const API_BASE: Option<&str> = option_env!("HOLOCRON_API_BASE");

/// Live search controller — owns the dropdown contents and visibility
pub static SEARCH: GlobalSignal<LiveSearch> = Signal::global(|| LiveSearch::new());

/// Collapsed/Active state of the search input
pub static TOGGLE: GlobalSignal<RevealToggle> = Signal::global(|| RevealToggle::Collapsed);

/// Tracked elements the current click has bubbled through
pub static CLICK_PATH: GlobalSignal<ClickPath> = Signal::global(|| ClickPath::new());

/// Search client, resolved on first use
static CLIENT: GlobalSignal<Option<SearchClient>> = Signal::global(|| None);

/// Client for the `/search` endpoint. The web build targets the page's own
/// origin unless `HOLOCRON_API_BASE` was set.
pub async fn search_client() -> SearchClient {
    let cached = CLIENT.read().clone();
    if let Some(client) = cached {
        return client;
    }

    let origin = page_origin().await;
    let config = SearchConfig::for_page(API_BASE, origin.as_deref()).unwrap_or_else(|e| {
        error!(error = %e, "Falling back to the default search endpoint");
        SearchConfig::default()
    });
    debug!(base_url = %config.base_url, "Resolved search endpoint");

    let client = SearchClient::new(config);
    *CLIENT.write() = Some(client.clone());
    client
}

#[cfg(not(feature = "desktop"))]
async fn page_origin() -> Option<String> {
    match document::eval("return window.location.origin;").await {
        Ok(value) => value.as_str().map(str::to_string),
        Err(e) => {
            error!(error = ?e, "Could not read the page origin");
            None
        }
    }
}

// The desktop webview has no site origin to talk to
#[cfg(feature = "desktop")]
async fn page_origin() -> Option<String> {
    None
}
