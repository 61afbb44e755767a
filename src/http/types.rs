//! Page and transport abstractions

use crate::error::Result;
use crate::types::Record;
use async_trait::async_trait;
use reqwest::header::HeaderMap;

/// One decoded response: the record array plus the response headers
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Records decoded from the JSON array body
    pub records: Vec<Record>,
    /// Response headers, kept for pagination
    pub headers: HeaderMap,
}

impl Page {
    /// Create a page from records and headers
    pub fn new(records: Vec<Record>, headers: HeaderMap) -> Self {
        Self { records, headers }
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Something that can fetch a page for an API path
///
/// `path` is appended to the base URL verbatim, query string included.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch and decode one page
    async fn fetch(&self, path: &str) -> Result<Page>;
}
