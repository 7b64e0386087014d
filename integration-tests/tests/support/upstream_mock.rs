#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};
use serde_json::{Value, json};

/// What the mock upstream answers with.
#[derive(Clone)]
pub enum MockReply {
    /// 200 with `choices[0].message.content` set to this string.
    Content(String),
    /// A failure status with an opaque body.
    Failure(StatusCode),
}

/// In-process stand-in for the OpenAI chat-completions endpoint. Counts
/// hits and captures every request body for prompt assertions.
pub struct MockOpenAi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<Value>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockOpenAi {
    pub async fn start(reply: MockReply) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = {
            let hits = hits.clone();
            let requests = requests.clone();
            Router::new().route(
                "/v1/chat/completions",
                post(move |Json(body): Json<Value>| {
                    let hits = hits.clone();
                    let requests = requests.clone();
                    let reply = reply.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        requests.lock().unwrap().push(body);
                        match reply {
                            MockReply::Content(content) => Json(json!({
                                "choices": [{"message": {"content": content}}]
                            }))
                            .into_response(),
                            MockReply::Failure(status) => {
                                (status, "upstream exploded: quota exceeded").into_response()
                            }
                        }
                    }
                }),
            )
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("mock upstream listener should bind");
        let bind_addr = listener
            .local_addr()
            .expect("mock upstream listener local address should exist");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("mock upstream server should run");
        });

        Self {
            base_url: format!("http://{bind_addr}"),
            hits,
            requests,
            handle,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
