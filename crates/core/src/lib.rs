//! Holocron core — live search for the Star Wars databank.
//!
//! Everything here is independent of the DOM: the view layers (`holocron-web`,
//! `holocron-cli`) feed input events in and render the state that comes out.
//!
//! # Modules
//!
//! - [`types`] — Result categories, entries and the decoded result set
//! - [`query`] — Trimmed, non-empty search query
//! - [`render`] — Dropdown rows and their HTML markup
//! - [`controller`] — Live search controller with stale-response discarding
//! - [`toggle`] — Collapsed/Active reveal toggle for the search input
//! - [`dismiss`] — Click-outside dismissal of the dropdown
//! - [`config`] — Search endpoint configuration (TOML)
//! - [`error`] — Search and configuration errors

pub mod config;
pub mod controller;
pub mod dismiss;
pub mod error;
pub mod query;
pub mod render;
pub mod toggle;
pub mod types;

pub use config::SearchConfig;
pub use controller::{run_search, Applied, Dropdown, InputOutcome, LiveSearch, SearchBackend, SearchTicket};
pub use error::{ConfigError, SearchError};
pub use query::SearchQuery;
pub use render::{dropdown_items, render_html, DropdownItem};
pub use toggle::{RevealToggle, ToggleEffect};
pub use types::{Category, EntryId, SearchEntry, SearchResultSet};

/// DOM ids the page provides for the search widget.
pub mod dom {
    pub const SEARCH_FORM: &str = "search-form";
    pub const SEARCH_INPUT: &str = "search-input";
    pub const RESULTS_DROPDOWN: &str = "search-results-dropdown";
    pub const SEARCH_BUTTON: &str = "search-button";
}
