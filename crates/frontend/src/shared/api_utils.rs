//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and ordering responses.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Build a URL for a single record under a collection URL
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::item_url;
///
/// let url = item_url("https://api.escuelajs.co/api/v1/products", 4);
/// assert_eq!(url, "https://api.escuelajs.co/api/v1/products/4");
/// ```
pub fn item_url(collection_url: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}", collection_url.trim_end_matches('/'), id)
}

/// Monotonic request counter
///
/// Every fetch takes a ticket with [`RequestSequence::begin`]. Once a newer
/// ticket exists, responses carrying older tickets are stale and must be dropped.
#[derive(Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
