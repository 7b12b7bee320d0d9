//! Live search controller: turns input events into search requests and search
//! responses into dropdown state.
//!
//! Every input bumps a sequence number. A non-empty input hands back a
//! [`SearchTicket`] stamped with that number; the caller performs the request
//! however it likes and feeds the outcome to [`LiveSearch::apply`]. Responses
//! for anything but the newest input are dropped, so a slow reply to `"Lu"` can
//! never overwrite the results for `"Luke"`, and no reply can reopen a
//! dropdown the user has already cleared.

use std::future::Future;

use tracing::{debug, error};

use crate::error::SearchError;
use crate::query::SearchQuery;
use crate::render::{dropdown_items, DropdownItem};
use crate::types::SearchResultSet;

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// Something that can answer a search query.
pub trait SearchBackend {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchResultSet, SearchError>>;
}

// ---------------------------------------------------------------------------
// Dropdown state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dropdown {
    items: Vec<DropdownItem>,
    visible: bool,
}

impl Dropdown {
    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Handle for one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: SearchQuery,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// What an input event asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input trimmed to nothing: the dropdown was emptied and hidden.
    Cleared,
    /// Issue a request for this ticket and pass the outcome to `apply`.
    Fetch(SearchTicket),
}

/// What applying a response did to the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Contents replaced; visible iff `count > 0`.
    Rendered { count: usize },
    /// The request failed; the dropdown was hidden.
    Hidden,
    /// A newer input arrived since the ticket was issued; nothing changed.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct LiveSearch {
    latest_seq: u64,
    dropdown: Dropdown,
}

impl LiveSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    /// Handle one input event carrying the field's raw text.
    pub fn on_input(&mut self, raw: &str) -> InputOutcome {
        self.latest_seq += 1;
        match SearchQuery::parse(raw) {
            None => {
                self.dropdown.items.clear();
                self.dropdown.visible = false;
                InputOutcome::Cleared
            }
            Some(query) => {
                debug!(seq = self.latest_seq, query = %query, "Issuing search");
                InputOutcome::Fetch(SearchTicket {
                    seq: self.latest_seq,
                    query,
                })
            }
        }
    }

    /// Apply the outcome of the request issued for `ticket`.
    pub fn apply(
        &mut self,
        ticket: &SearchTicket,
        result: Result<SearchResultSet, SearchError>,
    ) -> Applied {
        if ticket.seq != self.latest_seq {
            debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                query = %ticket.query,
                "Discarding stale search response"
            );
            return Applied::Stale;
        }

        match result {
            Ok(results) => {
                let items = dropdown_items(&results);
                let count = items.len();
                self.dropdown.items = items;
                self.dropdown.visible = count > 0;
                Applied::Rendered { count }
            }
            Err(e) => {
                // Contents stay as last rendered; only visibility changes
                error!(query = %ticket.query, error = %e, "Search request failed");
                self.dropdown.visible = false;
                Applied::Hidden
            }
        }
    }

    /// Hide the dropdown without touching its contents.
    pub fn dismiss(&mut self) {
        self.dropdown.visible = false;
    }
}

/// Drive one input event through `backend` to completion. Returns `None` when
/// the input was empty and no request was made.
pub async fn run_search<B>(backend: &B, search: &mut LiveSearch, raw: &str) -> Option<Applied>
where
    B: SearchBackend + ?Sized,
{
    match search.on_input(raw) {
        InputOutcome::Cleared => None,
        InputOutcome::Fetch(ticket) => {
            let result = backend.search(ticket.query()).await;
            Some(search.apply(&ticket, result))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, SearchEntry};
    use std::cell::RefCell;

    /// Records every query and answers from a fixed script.
    struct ScriptedBackend {
        seen: RefCell<Vec<String>>,
        reply: fn(&str) -> Result<SearchResultSet, SearchError>,
    }

    impl ScriptedBackend {
        fn new(reply: fn(&str) -> Result<SearchResultSet, SearchError>) -> Self {
            Self { seen: RefCell::new(vec![]), reply }
        }
    }

    impl SearchBackend for ScriptedBackend {
        async fn search(&self, query: &SearchQuery) -> Result<SearchResultSet, SearchError> {
            self.seen.borrow_mut().push(query.as_str().to_string());
            (self.reply)(query.as_str())
        }
    }

    fn luke() -> SearchResultSet {
        let mut set = SearchResultSet::default();
        set.push(Category::People, SearchEntry::new(1, "Luke Skywalker"));
        set
    }

    fn ticket(outcome: InputOutcome) -> SearchTicket {
        match outcome {
            InputOutcome::Fetch(t) => t,
            InputOutcome::Cleared => panic!("expected a fetch"),
        }
    }

    #[test]
    fn empty_input_clears_and_hides_without_request() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("Luke"));
        search.apply(&t, Ok(luke()));
        assert!(search.dropdown().is_visible());

        assert_eq!(search.on_input("   "), InputOutcome::Cleared);
        assert!(!search.dropdown().is_visible());
        assert!(search.dropdown().items().is_empty());
    }

    #[test]
    fn ticket_carries_trimmed_query() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("  Luke \n"));
        assert_eq!(t.query().as_str(), "Luke");
    }

    #[test]
    fn results_render_and_show() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("Luke"));
        assert_eq!(search.apply(&t, Ok(luke())), Applied::Rendered { count: 1 });

        let dropdown = search.dropdown();
        assert!(dropdown.is_visible());
        assert_eq!(dropdown.items()[0].href, "/characters/1");
        assert_eq!(dropdown.items()[0].label, "Luke Skywalker (Person)");
    }

    #[test]
    fn empty_results_hide_dropdown() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("Luke"));
        search.apply(&t, Ok(luke()));

        let t = ticket(search.on_input("Lukezzz"));
        assert_eq!(
            search.apply(&t, Ok(SearchResultSet::default())),
            Applied::Rendered { count: 0 }
        );
        assert!(!search.dropdown().is_visible());
        assert!(search.dropdown().items().is_empty());
    }

    #[test]
    fn failure_hides_but_keeps_last_contents() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("Luke"));
        search.apply(&t, Ok(luke()));

        let t = ticket(search.on_input("Luke S"));
        let applied = search.apply(&t, Err(SearchError::Status { status: 500 }));
        assert_eq!(applied, Applied::Hidden);
        assert!(!search.dropdown().is_visible());
        assert_eq!(search.dropdown().items().len(), 1);
    }

    #[test]
    fn older_response_cannot_overwrite_newer_input() {
        let mut search = LiveSearch::new();
        let slow = ticket(search.on_input("Lu"));
        let fast = ticket(search.on_input("Luke"));
        assert!(fast.seq() > slow.seq());

        assert_eq!(search.apply(&fast, Ok(luke())), Applied::Rendered { count: 1 });
        // The reply for "Lu" lands last and is discarded
        assert_eq!(search.apply(&slow, Ok(SearchResultSet::default())), Applied::Stale);
        assert!(search.dropdown().is_visible());
        assert_eq!(search.dropdown().items().len(), 1);
    }

    #[test]
    fn late_response_cannot_reopen_cleared_dropdown() {
        let mut search = LiveSearch::new();
        let t = ticket(search.on_input("Luke"));
        search.on_input("");

        assert_eq!(search.apply(&t, Ok(luke())), Applied::Stale);
        assert!(!search.dropdown().is_visible());
        assert!(search.dropdown().items().is_empty());
    }

    #[test]
    fn stale_failure_does_not_hide_current_results() {
        let mut search = LiveSearch::new();
        let old = ticket(search.on_input("Lu"));
        let new = ticket(search.on_input("Luke"));
        search.apply(&new, Ok(luke()));

        let err = SearchError::Transport("connection reset".into());
        assert_eq!(search.apply(&old, Err(err)), Applied::Stale);
        assert!(search.dropdown().is_visible());
    }

    #[test]
    fn dismiss_hides_regardless_of_state() {
        let mut search = LiveSearch::new();
        search.dismiss();
        assert!(!search.dropdown().is_visible());

        let t = ticket(search.on_input("Luke"));
        search.apply(&t, Ok(luke()));
        search.dismiss();
        assert!(!search.dropdown().is_visible());
        assert_eq!(search.dropdown().items().len(), 1);
    }

    #[tokio::test]
    async fn run_search_issues_exactly_one_request_per_non_empty_input() {
        let backend = ScriptedBackend::new(|_| Ok(luke()));
        let mut search = LiveSearch::new();

        assert_eq!(run_search(&backend, &mut search, "  ").await, None);
        assert!(backend.seen.borrow().is_empty());

        let applied = run_search(&backend, &mut search, " Luke ").await;
        assert_eq!(applied, Some(Applied::Rendered { count: 1 }));
        assert_eq!(*backend.seen.borrow(), vec!["Luke".to_string()]);
    }

    #[tokio::test]
    async fn run_search_hides_on_backend_failure() {
        let backend = ScriptedBackend::new(|q| {
            if q == "Luke" {
                Ok(luke())
            } else {
                Err(SearchError::Transport("offline".into()))
            }
        });
        let mut search = LiveSearch::new();
        run_search(&backend, &mut search, "Luke").await;
        assert!(search.dropdown().is_visible());

        let applied = run_search(&backend, &mut search, "Leia").await;
        assert_eq!(applied, Some(Applied::Hidden));
        assert!(!search.dropdown().is_visible());
    }
}
