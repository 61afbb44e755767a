//! Common types used throughout scc-inventory
//!
//! The API returns loosely-shaped JSON arrays whose elements differ per
//! resource. [`Record`] is the union of every field the client knows how to
//! display; anything the server leaves out (or sends as `null`) decodes to
//! the field's zero value.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Record
// ============================================================================

/// One element of the JSON array returned for a resource page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub status: String,

    #[serde(deserialize_with = "null_as_default")]
    pub expires_at: String,

    #[serde(deserialize_with = "null_as_default")]
    pub systems_count: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub virtual_count: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub identifier: String,

    #[serde(deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(deserialize_with = "null_as_default")]
    pub regcode: String,

    #[serde(deserialize_with = "null_as_default")]
    pub product_classes: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub login: String,

    #[serde(deserialize_with = "null_as_default")]
    pub password: String,

    #[serde(deserialize_with = "null_as_default")]
    pub last_seen_at: String,

    #[serde(deserialize_with = "null_as_default")]
    pub distro_target: String,

    #[serde(deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(deserialize_with = "null_as_default")]
    pub installer_updates: bool,
}

impl Record {
    /// True when no displayable field is populated
    pub fn is_blank(&self) -> bool {
        self == &Record::default()
    }
}

/// Treat an explicit JSON `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// Fetch Summary
// ============================================================================

/// Counters accumulated over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    /// Pages fetched, including the first
    pub pages: u32,
    /// Records rendered across all pages
    pub records: usize,
}

impl FetchSummary {
    /// Account for one fetched page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.records += records;
    }

    /// Fold another summary into this one
    pub fn merge(&mut self, other: FetchSummary) {
        self.pages += other.pages;
        self.records += other.records;
    }
}
