//! Concurrency tests for the read-modify-write coordination layer
//!
//! The remote document is the only shared resource and it is deliberately
//! unprotected: two mutations that both load before either saves will
//! overwrite each other, last writer winning at whole-document granularity.
//! These tests make that interleaving deterministic instead of leaving it
//! as an unverified assumption — once end to end over HTTP with a store
//! whose reads hold until every racer has loaded, and once at the
//! coordinator seam with a wider fan-out.

mod common;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use futures_util::future::join_all;
use tokio::sync::Barrier;

use binfolio::backend::collections::insert_front;
use binfolio::backend::server::{create_app, AppConfig};
use binfolio::backend::store::client::StoreError;
use binfolio::backend::store::document::{CodeSnippet, Document};
use binfolio::backend::store::{Coordinator, DocumentStore};

use common::{ADMIN_KEY, BIN_ID, MASTER_KEY};

/// Mock bin whose GET responses hold at a barrier until every racing
/// request has taken its pre-mutation snapshot.
#[derive(Clone)]
struct RacyBin {
    doc: Arc<Mutex<Document>>,
    load_barrier: Arc<Barrier>,
}

impl RacyBin {
    fn new(doc: Document, racers: usize) -> Self {
        Self {
            doc: Arc::new(Mutex::new(doc)),
            load_barrier: Arc::new(Barrier::new(racers)),
        }
    }

    fn snapshot(&self) -> Document {
        self.doc.lock().unwrap().clone()
    }

    async fn spawn(&self) -> String {
        async fn get_bin(State(bin): State<RacyBin>) -> Json<serde_json::Value> {
            let snapshot = bin.snapshot();
            bin.load_barrier.wait().await;
            Json(serde_json::json!({ "record": snapshot }))
        }

        async fn put_bin(State(bin): State<RacyBin>, Json(doc): Json<Document>) -> StatusCode {
            *bin.doc.lock().unwrap() = doc;
            StatusCode::OK
        }

        let app = Router::new()
            .route(&format!("/{BIN_ID}"), get(get_bin).put(put_bin))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind racy bin");
        let addr: SocketAddr = listener.local_addr().expect("racy bin addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve racy bin");
        });

        format!("http://{addr}")
    }
}

/// Two concurrent POST /codes requests race on load; both report success
/// but only one of the two snippets survives in the stored document.
#[tokio::test]
async fn test_concurrent_code_posts_last_writer_wins_end_to_end() {
    let bin = RacyBin::new(Document::default(), 2);
    let store_base_url = bin.spawn().await;
    let config = AppConfig {
        bin_id: BIN_ID.to_string(),
        master_key: MASTER_KEY.to_string(),
        admin_key: ADMIN_KEY.to_string(),
        store_base_url,
        protect_code_posts: false,
        port: 0,
    };
    let server = TestServer::new(create_app(config)).expect("test server");

    let post_a = server
        .post("/codes")
        .json(&serde_json::json!({ "title": "from A", "code": "a()" }));
    let post_b = server
        .post("/codes")
        .json(&serde_json::json!({ "title": "from B", "code": "b()" }));

    let (response_a, response_b) = tokio::join!(post_a, post_b);

    // Both callers were told their write succeeded
    assert_eq!(response_a.status_code(), StatusCode::OK);
    assert_eq!(response_b.status_code(), StatusCode::OK);

    // ...but the second save overwrote the first one's effect
    let stored = bin.snapshot();
    assert_eq!(stored.codes.len(), 1);
    let survivor = &stored.codes[0].title;
    assert!(survivor == "from A" || survivor == "from B");
}

/// In-memory store double for driving the coordinator directly.
#[derive(Clone)]
struct BarrierStore {
    doc: Arc<Mutex<Document>>,
    load_barrier: Arc<Barrier>,
}

impl BarrierStore {
    fn new(doc: Document, racers: usize) -> Self {
        Self {
            doc: Arc::new(Mutex::new(doc)),
            load_barrier: Arc::new(Barrier::new(racers)),
        }
    }
}

impl DocumentStore for BarrierStore {
    async fn load(&self) -> Result<Document, StoreError> {
        let snapshot = self.doc.lock().unwrap().clone();
        self.load_barrier.wait().await;
        Ok(snapshot)
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        *self.doc.lock().unwrap() = doc.clone();
        Ok(())
    }
}

/// The race generalizes to any fan-out: N writers that all load the same
/// revision leave exactly one insert behind.
#[tokio::test]
async fn test_wider_fan_out_still_keeps_exactly_one_insert() {
    const RACERS: usize = 4;

    let store = BarrierStore::new(Document::default(), RACERS);
    let coordinator = Coordinator::new(store.clone());

    let writes = (0..RACERS).map(|i| {
        let coordinator = &coordinator;
        async move {
            coordinator
                .mutate(move |doc| {
                    insert_front(
                        &mut doc.codes,
                        CodeSnippet::new(format!("snippet {i}"), "body".to_string()),
                    );
                    Ok(())
                })
                .await
        }
    });

    let results = join_all(writes).await;
    assert!(results.iter().all(Result::is_ok));

    let stored = store.doc.lock().unwrap().clone();
    assert_eq!(stored.codes.len(), 1);
}
