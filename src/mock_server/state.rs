//! Mock server state management.
//!
//! Provides the in-memory data store for the mock ConnectWise API server.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// One request as seen by the mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path without the leading slash.
    pub path: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Records indexed by collection path (e.g., "service/tickets").
    pub collections: HashMap<String, Vec<Value>>,

    /// Status codes to return instead of a page, keyed by (path, page).
    /// Each entry is used once.
    pub failures: HashMap<(String, u32), VecDeque<u16>>,

    /// Every request received, in order.
    pub requests: Vec<RecordedRequest>,

    /// Optional client id. If set, requests must send it in the `clientId` header.
    pub required_client_id: Option<String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Store the records of a collection.
    pub fn with_collection(mut self, path: &str, records: Vec<Value>) -> Self {
        self.collections
            .insert(path.trim_matches('/').to_string(), records);
        self
    }

    /// Make the next request for `page` of `path` fail with `status`.
    pub fn with_failure(mut self, path: &str, page: u32, status: u16) -> Self {
        self.failures
            .entry((path.trim_matches('/').to_string(), page))
            .or_default()
            .push_back(status);
        self
    }

    /// Set the required client id.
    pub fn with_required_client_id(mut self, client_id: &str) -> Self {
        self.required_client_id = Some(client_id.to_string());
        self
    }

    /// Get the records of a collection.
    pub fn collection(&self, path: &str) -> Option<&Vec<Value>> {
        self.collections.get(path)
    }

    /// Find one record by its `id` field.
    pub fn record(&self, path: &str, id: u64) -> Option<&Value> {
        self.collections
            .get(path)?
            .iter()
            .find(|r| r.get("id").and_then(Value::as_u64) == Some(id))
    }

    /// Take the next injected failure for this page, if any.
    pub fn take_failure(&mut self, path: &str, page: u32) -> Option<u16> {
        self.failures
            .get_mut(&(path.to_string(), page))
            .and_then(VecDeque::pop_front)
    }

    /// Slice out one page of a collection.
    ///
    /// Pages past the end are empty, as on the real service.
    pub fn page(&self, path: &str, page: u32, page_size: u32) -> Option<Vec<Value>> {
        let records = self.collections.get(path)?;
        let start = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        Some(
            records
                .iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect(),
        )
    }

    /// Number of requests made to `path`.
    pub fn request_count(&self, path: &str) -> usize {
        self.requests.iter().filter(|r| r.path == path).count()
    }
}
