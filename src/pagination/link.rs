//! Link header page-count extraction
//!
//! The API encodes the highest page number as the query value of the first
//! URL in each `Link` header value:
//!
//! ```text
//! Link: <https://scc.suse.com/connect/organizations/systems?page=4>; rel="last", ...
//! ```
//!
//! This is not a general RFC 8288 parser. Only the part before the first `>`
//! is looked at, and the count is the second `=`-separated piece of it.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, LINK};
use std::ops::Range;
use tracing::debug;

/// Query parameter carrying the page number
pub const PAGE_PARAM: &str = "page";

/// Extract the page count from one `Link` header value
pub fn parse_page_count(value: &str) -> Result<u32> {
    // splitn always yields at least one item
    let target = value.splitn(2, '>').next().unwrap_or(value);

    let count = target
        .split('=')
        .nth(1)
        .ok_or_else(|| Error::page_count(value, "no '=' segment before '>'"))?;

    count
        .parse::<u32>()
        .map_err(|e| Error::page_count(value, e.to_string()))
}

/// Page counts for every `Link` value in `headers`
///
/// Unreadable values count as zero pages.
pub fn link_page_counts(headers: &HeaderMap) -> Vec<u32> {
    headers
        .get_all(LINK)
        .iter()
        .map(|value| {
            let parsed = value
                .to_str()
                .map_err(|e| {
                    Error::page_count(String::from_utf8_lossy(value.as_bytes()), e.to_string())
                })
                .and_then(parse_page_count);

            match parsed {
                Ok(count) => count,
                Err(e) => {
                    debug!("Ignoring link header value: {e}");
                    0
                }
            }
        })
        .collect()
}

/// Pages to request after the first, for a reported count of `total`
pub fn follow_up_pages(total: u32) -> Range<u32> {
    2..total.max(2)
}

/// Path for page `page` of the collection at `base_path`
pub fn page_path(base_path: &str, page: u32) -> String {
    let separator = if base_path.contains('?') { '&' } else { '?' };
    format!("{base_path}{separator}{PAGE_PARAM}={page}")
}
