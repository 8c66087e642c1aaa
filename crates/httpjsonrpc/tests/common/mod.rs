//! In-process mock JSON-RPC server used by the integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use httpjsonrpc::{HttpCodec, RequestEnvelope, ResponseEnvelope};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock server sends back for one request
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl MockReply {
    /// 200 with the given JSON body
    pub fn json(body: serde_json::Value) -> Self {
        Self::raw(StatusCode::OK, body.to_string())
    }

    /// 200 with a success envelope echoing the request id
    pub fn result(id: u64, result: serde_json::Value) -> Self {
        Self::json(serde_json::to_value(ResponseEnvelope::success(id, result)).unwrap())
    }

    /// Arbitrary status and body
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&RequestEnvelope) -> MockReply + Send + Sync;

struct MockState {
    responder: Box<Responder>,
    requests: Mutex<Vec<RequestEnvelope>>,
    content_types: Mutex<Vec<String>>,
    completed: Mutex<Vec<u64>>,
}

/// A running mock server bound to an ephemeral localhost port
pub struct MockServer {
    pub url: String,
    state: Arc<MockState>,
    task: tokio::task::JoinHandle<()>,
}

impl MockServer {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&RequestEnvelope) -> MockReply + Send + Sync + 'static,
    {
        let state = Arc::new(MockState {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
            content_types: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .route("/rpc", post(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/rpc", addr),
            state,
            task,
        }
    }

    /// Server that answers every call with `{"id": <id>, "result": <params[0]>, "error": null}`
    pub async fn echo() -> Self {
        Self::start(|req| MockReply::result(req.id, req.param().clone())).await
    }

    pub fn codec(&self) -> HttpCodec {
        HttpCodec::new(&self.url).unwrap()
    }

    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RequestEnvelope> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Content-Type header of each request, in arrival order
    pub fn content_types(&self) -> Vec<String> {
        self.state.content_types.lock().unwrap().clone()
    }

    /// Request ids in the order the server finished answering them
    pub fn completion_order(&self) -> Vec<u64> {
        self.state.completed.lock().unwrap().clone()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let request: RequestEnvelope = serde_json::from_slice(&body).unwrap();
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.content_types.lock().unwrap().push(content_type);
    state.requests.lock().unwrap().push(request.clone());

    let reply = (state.responder)(&request);
    tokio::time::sleep(reply.delay).await;

    state.completed.lock().unwrap().push(request.id);
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}

/// Poll `condition` until it holds, failing the test after `limit`
pub async fn eventually(limit: Duration, mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(limit, async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
