//! Pagination module
//!
//! The inventory API announces the number of pages for a collection in the
//! `Link` header of the first response. The driver reads that count and
//! fetches the remaining pages one after another, handing each page to a
//! [`PageSink`] as soon as it arrives.
//!
//! # Page bound
//!
//! For a reported count `N` the follow-up pages are `2..N`, upper bound
//! exclusive: page `N` itself is not requested. The tests in this module pin
//! that behaviour.

mod driver;
mod link;

pub use driver::{PageDriver, PageSink};
pub use link::{follow_up_pages, link_page_counts, page_path, parse_page_count, PAGE_PARAM};
