//! Stub search endpoint for client integration tests.
//!
//! Serves an axum router on an ephemeral localhost port and records every
//! `query` parameter it receives, already percent-decoded.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use holocron_core::SearchConfig;
use holocron_http::SearchClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// How the stub answers `/search`.
#[derive(Clone, Copy)]
pub enum Reply {
    /// One person named after the query, every other category empty.
    Echo,
    /// Every category empty.
    Nothing,
    /// The given status with an HTML body.
    Status(u16),
    /// `200 OK` with a body that is not JSON.
    Garbage,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    seen: Arc<Mutex<Vec<String>>>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(reply: Reply) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            seen: seen.clone(),
        };
        let app = Router::new().route("/search", get(search)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server crashed");
        });

        StubServer { addr, seen }
    }

    pub fn client(&self) -> SearchClient {
        let config = SearchConfig::default()
            .with_base_url(&format!("http://{}/", self.addr))
            .expect("Stub address is a valid URL");
        SearchClient::new(config)
    }

    /// Queries received so far, in arrival order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

fn empty_body() -> Value {
    json!({
        "people": [], "films": [], "starships": [],
        "vehicles": [], "planets": [], "species": []
    })
}

async fn search(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let query = params.get("query").cloned().unwrap_or_default();
    state.seen.lock().unwrap().push(query.clone());

    match state.reply {
        Reply::Echo => {
            let mut body = empty_body();
            body["people"] = json!([{ "id": 1, "name": query, "type": "person" }]);
            axum::Json(body).into_response()
        }
        Reply::Nothing => axum::Json(empty_body()).into_response(),
        Reply::Status(code) => {
            let status = StatusCode::from_u16(code).expect("valid status code");
            (status, "<html><body>Internal Server Error</body></html>").into_response()
        }
        Reply::Garbage => "<!doctype html><p>not json</p>".into_response(),
    }
}
