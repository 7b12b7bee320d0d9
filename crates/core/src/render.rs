//! Dropdown rendering: one linked item per search hit, in category order.

use serde::Serialize;

use crate::types::{Category, EntryId, SearchResultSet};

/// One row of the results dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownItem {
    pub category: Category,
    pub id: EntryId,
    /// `"{display name} ({category label})"`, e.g. `Luke Skywalker (Person)`.
    pub label: String,
    /// Detail page path, e.g. `/characters/1`.
    pub href: String,
}

/// Build the dropdown rows for a result set.
pub fn dropdown_items(results: &SearchResultSet) -> Vec<DropdownItem> {
    results
        .iter()
        .map(|(category, entry)| DropdownItem {
            category,
            id: entry.id.clone(),
            label: format!("{} ({})", entry.display_name, category.label()),
            href: category.detail_path(&entry.id),
        })
        .collect()
}

/// Markup for the dropdown's contents, one `<li>` per item. Text and
/// attribute values are escaped.
pub fn render_html(items: &[DropdownItem]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(r#"<li class="dropdown-item"><a class="dropdown-list-item" href=""#);
        out.push_str(&escape_html(&item.href));
        out.push_str(r#"">"#);
        out.push_str(&escape_html(&item.label));
        out.push_str("</a></li>");
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
