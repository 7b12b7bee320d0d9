//! Result types shared across Holocron: the six result categories, the entries
//! the search endpoint returns for each, and the decoded result set.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::SearchError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// One of the six kinds of record the search endpoint returns. Serializes as
/// its key in the response body (`people`, `films`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    People,
    Films,
    Starships,
    Vehicles,
    Planets,
    Species,
}

impl Category {
    /// Render order of the dropdown.
    pub const ALL: [Category; 6] = [
        Category::People,
        Category::Films,
        Category::Starships,
        Category::Vehicles,
        Category::Planets,
        Category::Species,
    ];

    /// Singular label shown in parentheses after each result.
    pub fn label(self) -> &'static str {
        match self {
            Category::People => "Person",
            Category::Films => "Film",
            Category::Starships => "Starship",
            Category::Vehicles => "Vehicle",
            Category::Planets => "Planet",
            Category::Species => "Species",
        }
    }

    /// Path prefix of the detail page. People live under `/characters`.
    pub fn route_prefix(self) -> &'static str {
        match self {
            Category::People => "/characters",
            Category::Films => "/films",
            Category::Starships => "/starships",
            Category::Vehicles => "/vehicles",
            Category::Planets => "/planets",
            Category::Species => "/species",
        }
    }

    /// Detail page path for one record, e.g. `/characters/1`.
    pub fn detail_path(self, id: &EntryId) -> String {
        format!("{}/{}", self.route_prefix(), id)
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Record id as sent by the backend. Integer ids are the norm; string ids are
/// accepted and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Int(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntryId {
    fn from(n: i64) -> Self {
        EntryId::Int(n)
    }
}

/// A single search hit: the record id and its display name (`name` or `title`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: EntryId,
    pub display_name: String,
}

impl SearchEntry {
    pub fn new(id: impl Into<EntryId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Result set
// ---------------------------------------------------------------------------

/// Decoded body of one search response. Order inside each category is the
/// order the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "WireResultSet")]
pub struct SearchResultSet {
    pub people: Vec<SearchEntry>,
    pub films: Vec<SearchEntry>,
    pub starships: Vec<SearchEntry>,
    pub vehicles: Vec<SearchEntry>,
    pub planets: Vec<SearchEntry>,
    pub species: Vec<SearchEntry>,
}

impl SearchResultSet {
    /// Decode a response body. Missing or `null` categories decode as empty.
    pub fn from_json(body: &str) -> Result<Self, SearchError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn entries(&self, category: Category) -> &[SearchEntry] {
        match category {
            Category::People => &self.people,
            Category::Films => &self.films,
            Category::Starships => &self.starships,
            Category::Vehicles => &self.vehicles,
            Category::Planets => &self.planets,
            Category::Species => &self.species,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<SearchEntry> {
        match category {
            Category::People => &mut self.people,
            Category::Films => &mut self.films,
            Category::Starships => &mut self.starships,
            Category::Vehicles => &mut self.vehicles,
            Category::Planets => &mut self.planets,
            Category::Species => &mut self.species,
        }
    }

    /// Append an entry to a category, after any entries already there.
    pub fn push(&mut self, category: Category, entry: SearchEntry) {
        self.entries_mut(category).push(entry);
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.entries(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every entry tagged with its category, in dropdown order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &SearchEntry)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |c| self.entries(c).iter().map(move |e| (c, e)))
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct NamedEntry {
    id: EntryId,
    name: String,
}

#[derive(Deserialize)]
struct TitledEntry {
    id: EntryId,
    title: String,
}

#[derive(Deserialize)]
struct WireResultSet {
    #[serde(default, deserialize_with = "null_as_empty")]
    people: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    films: Vec<TitledEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    starships: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    vehicles: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    planets: Vec<NamedEntry>,
    #[serde(default, deserialize_with = "null_as_empty")]
    species: Vec<NamedEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn named(entries: Vec<NamedEntry>) -> Vec<SearchEntry> {
    entries
        .into_iter()
        .map(|e| SearchEntry { id: e.id, display_name: e.name })
        .collect()
}

impl From<WireResultSet> for SearchResultSet {
    fn from(wire: WireResultSet) -> Self {
        SearchResultSet {
            people: named(wire.people),
            films: wire
                .films
                .into_iter()
                .map(|e| SearchEntry { id: e.id, display_name: e.title })
                .collect(),
            starships: named(wire.starships),
            vehicles: named(wire.vehicles),
            planets: named(wire.planets),
            species: named(wire.species),
        }
    }
}
