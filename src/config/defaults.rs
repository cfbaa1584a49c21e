//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "Here is a list of all my blogs".into()
    }

    pub fn url_prefix() -> String {
        "/blog/post/".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn root() -> PathBuf {
        "./".into()
    }

    pub fn posts() -> String {
        "posts".into()
    }

    pub fn pages() -> String {
        "pages".into()
    }

    pub fn extension() -> String {
        "md".into()
    }
}
