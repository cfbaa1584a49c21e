//! Post record produced by the metadata parser.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Accepted layout of the `date` header value.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One parsed content document.
///
/// Built once by the parser and never modified afterwards; the repository
/// hands out shared read-only views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Display title (from the `title` header key)
    pub title: String,

    /// Stable identifier, the file name without extension
    pub path_title: String,

    /// Publication date, `YYYY-MM-DD HH:MM:SS`; also the sort key
    pub date: String,

    /// Tags in header order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Single category
    pub category: String,

    /// Raw markdown body, header stripped
    #[serde(skip)]
    pub content: String,

    /// Enables the embedded cosmo widget on the post page
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub enable_cosmo: bool,

    /// Optional thumbnail URL or path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Header keys the parser does not know about
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl Post {
    /// Parse `date` into a timestamp.
    ///
    /// A bare `YYYY-MM-DD` is read as midnight. Returns `None` when the value
    /// matches neither layout.
    pub fn published(&self) -> Option<NaiveDateTime> {
        let date = self.date.trim();
        NaiveDateTime::parse_from_str(date, DATE_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }

    /// Whether the post carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
