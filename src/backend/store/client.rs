/**
 * Remote Document Store Client
 *
 * Client for a JSONBin-style document store: one JSON document addressed by
 * a bin id, authenticated with a master key header, read with a full GET
 * and written with a full PUT. There is no partial-update capability and no
 * local cache.
 *
 * # Wire Protocol
 *
 * - `GET  <base>/<bin_id>` with `X-Master-Key` → `{"record": <document>, ...}`
 * - `PUT  <base>/<bin_id>` with `X-Master-Key` and the bare document body
 *
 * # Failure Surface
 *
 * Any transport failure or non-success status becomes
 * `StoreError::Unavailable`; an unparseable success payload becomes
 * `StoreError::Malformed`. Both surface to callers as HTTP 500 and are
 * never retried.
 */

use serde::Deserialize;
use thiserror::Error;

use crate::backend::store::document::Document;

/// Default JSONBin v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3/b";

/// Header carrying the store credential
const MASTER_KEY_HEADER: &str = "X-Master-Key";

/// Remote store failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or answered with a non-success status
    #[error("document store unavailable: {0}")]
    Unavailable(String),

    /// The store answered successfully but the payload did not parse
    #[error("document store returned a malformed payload: {0}")]
    Malformed(String),
}

/// Full-document load/save capability
///
/// The production implementation is [`JsonBinClient`]; tests drive the
/// coordinator through scripted in-memory implementations to pin down the
/// interleaving behavior of concurrent read-modify-write cycles.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// Fetch the entire remote document
    async fn load(&self) -> Result<Document, StoreError>;

    /// Overwrite the entire remote document
    async fn save(&self, doc: &Document) -> Result<(), StoreError>;
}

/// JSONBin read envelope; the metadata half is ignored
#[derive(Deserialize)]
struct BinEnvelope {
    record: Document,
}

/// Client for one remote bin
#[derive(Debug, Clone)]
pub struct JsonBinClient {
    http: reqwest::Client,
    bin_url: String,
    master_key: String,
}

impl JsonBinClient {
    /// Create a client for `<base_url>/<bin_id>`
    pub fn new(base_url: &str, bin_id: &str, master_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            bin_url: format!("{}/{}", base_url.trim_end_matches('/'), bin_id),
            master_key: master_key.into(),
        }
    }
}

impl DocumentStore for JsonBinClient {
    async fn load(&self) -> Result<Document, StoreError> {
        let response = self
            .http
            .get(&self.bin_url)
            .header(MASTER_KEY_HEADER, &self.master_key)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("bin fetch failed: {e}")))?;

        if !response.status().is_success() {
            tracing::error!("Bin fetch returned {}", response.status());
            return Err(StoreError::Unavailable(format!(
                "bin fetch returned {}",
                response.status()
            )));
        }

        let envelope: BinEnvelope = response
            .json()
            .await
            .map_err(|e| StoreError::Malformed(e.to_string()))?;

        Ok(envelope.record)
    }

    async fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let response = self
            .http
            .put(&self.bin_url)
            .header(MASTER_KEY_HEADER, &self.master_key)
            .json(doc)
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(format!("bin save failed: {e}")))?;

        if !response.status().is_success() {
            tracing::error!("Bin save returned {}", response.status());
            return Err(StoreError::Unavailable(format!(
                "bin save returned {}",
                response.status()
            )));
        }

        Ok(())
    }
}
