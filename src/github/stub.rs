// src/github/stub.rs
// =============================================================================
// A tiny in-process HTTP server for tests.
//
// It answers each request target (path plus query) from a fixed route table
// and records every target it saw, so tests can assert which calls were
// made and in what order. Unknown targets get a 404.
//
// We use an axum Router with a single fallback handler: every request lands
// in `respond`, which looks the target up in the table.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub(crate) struct StubResponse {
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl StubResponse {
    pub(crate) fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub(crate) fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub(crate) fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

// Shared between the test and every request handler
#[derive(Clone)]
struct Stub {
    routes: Arc<HashMap<String, StubResponse>>,
    seen: Arc<Mutex<Vec<String>>>,
}

pub(crate) struct StubServer {
    url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub(crate) async fn start(routes: Vec<(&str, StubResponse)>) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());

        let stub = Stub {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(target, response)| (target.to_string(), response))
                    .collect(),
            ),
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = stub.seen.clone();

        let app = Router::new().fallback(respond).with_state(stub);
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        StubServer { url, requests }
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(stub): State<Stub>, uri: Uri) -> impl IntoResponse {
    // The target is what the route table is keyed by: path plus query
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    stub.seen.lock().unwrap().push(target.clone());

    let response = stub
        .routes
        .get(&target)
        .cloned()
        .unwrap_or_else(|| StubResponse::status(404, r#"{"message": "Not Found"}"#));

    if let Some(delay) = response.delay {
        tokio::time::sleep(delay).await;
    }

    let status = StatusCode::from_u16(response.status).unwrap();
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
