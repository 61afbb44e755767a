//! Sequential page driver

use super::link::{follow_up_pages, link_page_counts, page_path};
use crate::error::Result;
use crate::http::Transport;
use crate::types::{FetchSummary, Record};
use reqwest::header::HeaderMap;
use tracing::{debug, info};

/// Receives pages in the order they are fetched
pub trait PageSink {
    /// Handle the records of page `page` (1-based)
    fn accept(&mut self, page: u32, records: &[Record]) -> Result<()>;
}

/// Drives the fetch of a collection page by page
pub struct PageDriver<'a, T: Transport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> PageDriver<'a, T> {
    /// Create a driver fetching through `transport`
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Fetch page 1 of `path`, then every follow-up page its headers announce
    pub async fn run<S: PageSink + ?Sized>(
        &self,
        path: &str,
        sink: &mut S,
    ) -> Result<FetchSummary> {
        info!("Fetching {path}");

        let first = self.transport.fetch(path).await?;
        sink.accept(1, &first.records)?;

        let mut summary = FetchSummary::default();
        summary.add_page(first.len());
        summary.merge(self.paginate(&first.headers, path, sink).await?);

        info!(
            pages = summary.pages,
            records = summary.records,
            "Finished fetching {path}"
        );
        Ok(summary)
    }

    /// Fetch the follow-up pages announced by `headers`
    ///
    /// Each `Link` value is handled on its own. A value whose count is zero or
    /// unreadable triggers no requests. The first failing request aborts the
    /// whole walk; pages already handed to `sink` stay delivered.
    pub async fn paginate<S: PageSink + ?Sized>(
        &self,
        headers: &HeaderMap,
        base_path: &str,
        sink: &mut S,
    ) -> Result<FetchSummary> {
        let mut summary = FetchSummary::default();

        for total in link_page_counts(headers) {
            if total == 0 {
                continue;
            }
            debug!("Link header reports {total} pages for {base_path}");

            for page in follow_up_pages(total) {
                let path = page_path(base_path, page);
                let next = self.transport.fetch(&path).await?;
                debug!("Page {page}/{total}: {} records", next.len());

                sink.accept(page, &next.records)?;
                summary.add_page(next.len());
            }
        }

        Ok(summary)
    }
}

impl<T: Transport + ?Sized> std::fmt::Debug for PageDriver<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDriver").finish_non_exhaustive()
    }
}
