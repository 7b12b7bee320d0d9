//! Click-outside dismissal.
//!
//! The view reports each document click as a [`ClickPath`]: the ids of the
//! tracked elements the click passed through while bubbling. A click whose path
//! does not include the search form closes the dropdown.

use std::ops::DerefMut;

use crate::controller::LiveSearch;

/// Answers whether a click target lies inside some region of the page.
pub trait Containment<T: ?Sized> {
    fn contains(&self, target: &T) -> bool;
}

/// Tracked element ids a click bubbled through, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickPath(Vec<String>);

impl ClickPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the click passed through element `id`.
    pub fn enter(&mut self, id: &str) {
        self.0.push(id.to_string());
    }

    pub fn passed_through(&self, id: &str) -> bool {
        self.0.iter().any(|e| e == id)
    }

    /// Hand back the recorded path and reset for the next click.
    pub fn take(&mut self) -> ClickPath {
        std::mem::take(self)
    }
}

/// An element of the page identified by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRegion<'a> {
    pub id: &'a str,
}

impl Containment<ClickPath> for ElementRegion<'_> {
    fn contains(&self, target: &ClickPath) -> bool {
        target.passed_through(self.id)
    }
}

/// Hide the dropdown unless `target` lies inside `region`. Returns whether the
/// click counted as outside. `search` is only called for outside clicks, so a
/// click inside the form never takes a write handle on the controller.
pub fn dismiss_outside<R, T, F, S>(region: &R, target: &T, search: F) -> bool
where
    R: Containment<T> + ?Sized,
    T: ?Sized,
    F: FnOnce() -> S,
    S: DerefMut<Target = LiveSearch>,
{
    if region.contains(target) {
        return false;
    }
    search().dismiss();
    true
}
