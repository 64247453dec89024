#![allow(dead_code)]

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Form, Router};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tower_http::services::ServeFile;

pub const FILE_PATH: &str = "/file.bin";
pub const CHANGING_PATH: &str = "/changing.bin";
pub const MISSING_PATH: &str = "/missing.bin";
pub const FORM_PATH: &str = "/form";

/// Deterministic body of `len` bytes.
pub fn fixed_content(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub struct TestServer {
    pub address: SocketAddr,
    requests: Arc<AtomicUsize>,
    _dir: TempDir,
}

impl TestServer {
    /// Serves `content` from a file under [`FILE_PATH`] (ranged requests are
    /// answered with 206), a body under [`CHANGING_PATH`] that is `content`
    /// for the first request and `changed` afterwards, and a form endpoint
    /// under [`FORM_PATH`] answering `ok` to `key1=value1`. [`MISSING_PATH`]
    /// always answers 404.
    pub async fn start(content: &[u8], changed: Vec<u8>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.bin");
        std::fs::write(&file, content).unwrap();

        let requests = Arc::new(AtomicUsize::new(0));
        let changing = ChangingBody {
            first: content.to_vec(),
            changed,
            served: Arc::new(AtomicUsize::new(0)),
        };
        let router = Router::new()
            .route_service(FILE_PATH, ServeFile::new(&file))
            .route(
                CHANGING_PATH,
                get(serve_changing_body).with_state(changing),
            )
            .route(FORM_PATH, post(handle_form))
            .route(MISSING_PATH, get(|| async { StatusCode::NOT_FOUND }))
            .layer(middleware::from_fn_with_state(
                requests.clone(),
                count_requests,
            ));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            address,
            requests,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[derive(Clone)]
struct ChangingBody {
    first: Vec<u8>,
    changed: Vec<u8>,
    served: Arc<AtomicUsize>,
}

async fn count_requests(
    State(requests): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

async fn serve_changing_body(State(body): State<ChangingBody>) -> Vec<u8> {
    if body.served.fetch_add(1, Ordering::SeqCst) == 0 {
        body.first
    } else {
        body.changed
    }
}

async fn handle_form(Form(form): Form<HashMap<String, String>>) -> (StatusCode, &'static str) {
    if form.get("key1").map(String::as_str) == Some("value1") {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::BAD_REQUEST, "unexpected form")
    }
}

/// Answers every connection with the same raw bytes and closes it.
pub async fn serve_raw(response: Vec<u8>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let response = response.clone();
            tokio::spawn(async move {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(&response).await;
                let _ = socket.shutdown().await;
            });
        }
    });
    address
}

pub fn write_config(dir: &Path, name: &str, config: serde_json::Value) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(&config).unwrap()).unwrap();
    path
}
