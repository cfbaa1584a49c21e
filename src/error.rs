//! Error types for the content pipeline.

use thiserror::Error;

/// Result alias used by the parsing, repository and rendering layers.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failures surfaced by the content core.
///
/// None of these are retried internally; callers decide how to present them.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Header delimiters missing, a header line without `": "`, or a header
    /// value that does not decode (tags literal, boolean flag).
    #[error("malformed document `{path_title}`: {reason}")]
    MalformedDocument { path_title: String, reason: String },

    /// Content location or a specific document is missing or unreadable.
    #[error("content unavailable: `{location}`")]
    ContentUnavailable {
        location: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// A fenced code block declared a language with no highlighting definition.
    #[error("unsupported code block language `{0}`")]
    UnsupportedLanguage(String),
}

impl ContentError {
    pub(crate) fn malformed(path_title: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path_title: path_title.to_owned(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unavailable(location: impl Into<String>, source: Option<std::io::Error>) -> Self {
        Self::ContentUnavailable {
            location: location.into(),
            source,
        }
    }
}
