pub mod endpoints;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::error::{EpirusError, Result};
use crate::types::{JsonRpcRequest, JsonRpcResponse};

/// JSON-RPC over HTTP client bound to a single endpoint URL.
#[derive(Debug, Clone)]
pub struct EpirusHttpClient {
    client: Client,
    url: String,
    next_id: Arc<AtomicU64>,
}

impl EpirusHttpClient {
    /// The URL is used verbatim; the gateway requires its trailing slash.
    pub fn new(url: &str) -> Result<Self> {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: &str) -> Result<Self> {
        // The URL path carries the login token; only the parse error is reported.
        Url::parse(url).map_err(|e| EpirusError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            client,
            url: url.to_string(),
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    /// Call `method` with positional `params` and decode the `result` field.
    pub async fn request<P, T>(&self, method: &str, params: P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = JsonRpcRequest::new(id, method, params);
        debug!(method, id, "rpc request");

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| EpirusError::Request(e.without_url()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(EpirusError::Http {
                status,
                message: body,
            });
        }

        let envelope: JsonRpcResponse = resp
            .json()
            .await
            .map_err(|e| EpirusError::Request(e.without_url()))?;

        if let Some(err) = envelope.error {
            return Err(EpirusError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        if envelope.id.as_ref().and_then(|v| v.as_u64()) != Some(id) {
            debug!(method, id, response_id = ?envelope.id, "rpc response id mismatch");
        }

        let result = envelope.result.unwrap_or(serde_json::Value::Null);
        Ok(serde_json::from_value(result)?)
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}
