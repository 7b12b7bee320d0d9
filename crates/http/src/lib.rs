//! HTTP client for the Holocron search endpoint.
//!
//! Issues `GET {base}{path}?{param}=<query>` and decodes the categorized JSON
//! body. Builds for native targets and for `wasm32`, where reqwest goes through
//! the browser's `fetch`. No timeout and no retry: a failed request is reported
//! once and the caller decides what to hide.

use std::future::Future;

use holocron_core::{SearchBackend, SearchConfig, SearchError, SearchQuery, SearchResultSet};
use reqwest::header::ACCEPT;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Run one search request. Non-2xx statuses and undecodable bodies are errors.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<SearchResultSet, SearchError> {
        let url = self.config.search_url(query)?;
        debug!(url = %url, "GET search");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        SearchResultSet::from_json(&body)
    }
}

impl SearchBackend for SearchClient {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<SearchResultSet, SearchError>> {
        self.fetch(query)
    }
}

fn transport(e: reqwest::Error) -> SearchError {
    SearchError::Transport(e.to_string())
}
