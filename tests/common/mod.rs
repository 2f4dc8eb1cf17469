//! Shared helpers for integration tests
//!
//! Provides a stateful mock document-store server (a tiny Axum app speaking
//! the JSONBin wire protocol) and helpers for building a `TestServer`
//! against it, so the full HTTP surface can be exercised end to end with
//! real full-document load/save round trips.

// Not every test crate uses every helper
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;

use binfolio::backend::server::{create_app, AppConfig};
use binfolio::backend::store::document::{CodeSnippet, Document, Project, Role, User};

/// Admin secret every test deployment is configured with
pub const ADMIN_KEY: &str = "test-admin-key";

/// Master key the mock bin expects on every request
pub const MASTER_KEY: &str = "test-master-key";

/// Bin id used by every test deployment
pub const BIN_ID: &str = "test-bin";

/// Stateful mock of the remote document store
///
/// Serves `GET /test-bin` with the JSONBin `{record: ...}` envelope and
/// overwrites its document on `PUT /test-bin`, rejecting requests without
/// the expected master key. Counts saves so tests can assert that rejected
/// requests never reach the store.
#[derive(Clone, Default)]
pub struct MockBin {
    doc: Arc<Mutex<Document>>,
    saves: Arc<AtomicUsize>,
}

impl MockBin {
    pub fn new(doc: Document) -> Self {
        Self {
            doc: Arc::new(Mutex::new(doc)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Current stored document
    pub fn snapshot(&self) -> Document {
        self.doc.lock().unwrap().clone()
    }

    /// Number of PUTs the bin has accepted
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Spawn the mock bin on an ephemeral port and return its base URL
    pub async fn spawn(&self) -> String {
        async fn get_bin(State(bin): State<MockBin>, headers: HeaderMap) -> Response {
            if !master_key_ok(&headers) {
                return StatusCode::UNAUTHORIZED.into_response();
            }
            Json(serde_json::json!({
                "record": bin.snapshot(),
                "metadata": { "id": BIN_ID }
            }))
            .into_response()
        }

        async fn put_bin(
            State(bin): State<MockBin>,
            headers: HeaderMap,
            Json(doc): Json<Document>,
        ) -> Response {
            if !master_key_ok(&headers) {
                return StatusCode::UNAUTHORIZED.into_response();
            }
            *bin.doc.lock().unwrap() = doc;
            bin.saves.fetch_add(1, Ordering::SeqCst);
            StatusCode::OK.into_response()
        }

        fn master_key_ok(headers: &HeaderMap) -> bool {
            headers
                .get("X-Master-Key")
                .and_then(|value| value.to_str().ok())
                == Some(MASTER_KEY)
        }

        let app = Router::new()
            .route(&format!("/{BIN_ID}"), get(get_bin).put(put_bin))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock bin");
        let addr: SocketAddr = listener.local_addr().expect("mock bin addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock bin");
        });

        format!("http://{addr}")
    }
}

/// Build a `TestServer` wired to the given mock bin
pub async fn spawn_app(bin: &MockBin, protect_code_posts: bool) -> TestServer {
    let store_base_url = bin.spawn().await;
    let config = AppConfig {
        bin_id: BIN_ID.to_string(),
        master_key: MASTER_KEY.to_string(),
        admin_key: ADMIN_KEY.to_string(),
        store_base_url,
        protect_code_posts,
        port: 0,
    };
    TestServer::new(create_app(config)).expect("test server")
}

/// Build a `TestServer` whose master key the bin will reject
pub async fn spawn_app_with_bad_master_key(bin: &MockBin) -> TestServer {
    let store_base_url = bin.spawn().await;
    let config = AppConfig {
        bin_id: BIN_ID.to_string(),
        master_key: "wrong-master-key".to_string(),
        admin_key: ADMIN_KEY.to_string(),
        store_base_url,
        protect_code_posts: false,
        port: 0,
    };
    TestServer::new(create_app(config)).expect("test server")
}

/// Admin key header pair for `TestRequest::add_header`
pub fn admin_header() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-admin-key"),
        HeaderValue::from_static(ADMIN_KEY),
    )
}

/// A document with a few of everything, including one admin account
pub fn seeded_document() -> Document {
    let mut doc = Document::default();

    let mut site = Project::new(
        "Portfolio site".to_string(),
        "Personal site built with Rust".to_string(),
        Some("https://example.com/site.png".to_string()),
        Some("https://example.com".to_string()),
        Some("https://github.com/example/site".to_string()),
        vec!["rust".to_string(), "axum".to_string()],
    );
    site.id = "1700000000001".to_string();
    let mut game = Project::new(
        "Snake game".to_string(),
        "Browser snake clone".to_string(),
        None,
        None,
        None,
        vec!["javascript".to_string()],
    );
    game.id = "1700000000002".to_string();
    // Seed order mirrors insert_front: newest first
    doc.projects = vec![site, game];

    let mut hello = CodeSnippet::new("hello".to_string(), "fn main() {}".to_string());
    hello.id = "1700000000003".to_string();
    doc.codes = vec![hello];

    let mut root = User::new("root".to_string(), "root-password".to_string(), Role::Admin);
    root.id = "1700000000004".to_string();
    let mut alice = User::new("alice".to_string(), "alice-password".to_string(), Role::User);
    alice.id = "1700000000005".to_string();
    doc.users = vec![root, alice];

    doc
}
