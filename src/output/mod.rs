//! Output module
//!
//! Renders fetched records to a writer, page by page.
//!
//! - **Pretty**: one labelled line per populated field, blank line between
//!   records
//! - **Json**: one compact JSON object per line

mod render;

pub use render::{populated_fields, OutputFormat, Renderer};
