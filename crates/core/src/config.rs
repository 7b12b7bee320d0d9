//! Search endpoint configuration, loaded from the `[search]` table of a TOML file.
//!
//! ```toml
//! [search]
//! base_url = "http://127.0.0.1:5000"
//! path = "/search"
//! query_param = "query"
//! ```

use serde::Deserialize;
use std::path::Path;
use url::Url;

use crate::error::{ConfigError, SearchError};
use crate::query::SearchQuery;

/// Where the backend's Flask dev server listens by default.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: Url,
    pub path: String,
    pub query_param: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            path: "/search".to_string(),
            query_param: "query".to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    search: SearchConfig,
}

impl SearchConfig {
    /// Load from a TOML file. A file without a `[search]` table yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), base_url = %file.search.base_url, "Loaded search config");
        Ok(file.search)
    }

    /// Replace the base URL, e.g. from a command-line flag.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.base_url = Url::parse(url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: url.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// Config for a widget embedded in a page. An explicit override wins, then
    /// the page's own origin, then the default.
    pub fn for_page(override_url: Option<&str>, page_origin: Option<&str>) -> Result<Self, ConfigError> {
        match override_url.or(page_origin) {
            Some(url) => Self::default().with_base_url(url),
            None => Ok(Self::default()),
        }
    }

    /// Full request URL for a query: `path` is appended below the base URL's own
    /// path, and the query text is percent-encoded.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, SearchError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        let mut url = base.join(self.path.trim_start_matches('/'))?;
        url.query_pairs_mut()
            .clear()
            .append_pair(&self.query_param, query.as_str());
        Ok(url)
    }
}
