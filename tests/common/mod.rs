//! Throwaway HTTP servers standing in for the external services.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::Value;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_mock(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Mock server has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Mock server failed");
    });
    format!("http://{}", addr)
}

/// A fake chat-completion endpoint with a canned reply.
#[derive(Clone)]
pub struct MockCompletions {
    pub hits: Arc<AtomicUsize>,
    pub last_auth: Arc<Mutex<Option<String>>>,
    pub last_body: Arc<Mutex<Option<Value>>>,
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl MockCompletions {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            last_auth: Arc::new(Mutex::new(None)),
            last_body: Arc::new(Mutex::new(None)),
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// A successful reply whose first message is `content`.
    pub fn replying(content: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        });
        Self::new(StatusCode::OK, body.to_string())
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Start the server; returns the base URL to hand to the client.
    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/chat/completions", post(completions))
            .with_state(self.clone());
        spawn_mock(router).await
    }
}

async fn completions(
    State(mock): State<MockCompletions>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    *mock.last_auth.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *mock.last_body.lock().unwrap() = serde_json::from_str(&body).ok();

    if !mock.delay.is_zero() {
        tokio::time::sleep(mock.delay).await;
    }
    (mock.status, mock.body.clone())
}

/// A fake image service keyed on the prompt text.
///
/// Prompts containing `broken` answer 500, prompts containing `blank` answer
/// an empty body, anything else answers a few PNG-ish bytes.
#[derive(Clone, Default)]
pub struct MockImages {
    pub hits: Arc<Mutex<HashMap<String, usize>>>,
}

impl MockImages {
    pub fn hits_for(&self, prompt: &str) -> usize {
        self.hits.lock().unwrap().get(prompt).copied().unwrap_or(0)
    }

    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/prompt/{prompt}", get(image))
            .with_state(self.clone());
        spawn_mock(router).await
    }
}

async fn image(
    State(mock): State<MockImages>,
    Path(prompt): Path<String>,
) -> (StatusCode, Vec<u8>) {
    *mock.hits.lock().unwrap().entry(prompt.clone()).or_default() += 1;

    if prompt.contains("broken") {
        (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
    } else if prompt.contains("blank") {
        (StatusCode::OK, Vec::new())
    } else {
        (StatusCode::OK, b"\x89PNG fake image".to_vec())
    }
}
