//! `[content]` section configuration.
//!
//! Where documents live and how they are named.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in folio.toml.
///
/// Documents are read from `<root>/<bucket>/<identifier>.<extension>`.
///
/// # Example
/// ```toml
/// [content]
/// root = "."
/// posts = "posts"
/// pages = "pages"
/// extension = "md"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Directory holding the buckets (relative to the project root).
    #[serde(default = "defaults::content::root")]
    #[educe(Default = defaults::content::root())]
    pub root: PathBuf,

    /// Bucket of blog posts.
    #[serde(default = "defaults::content::posts")]
    #[educe(Default = defaults::content::posts())]
    pub posts: String,

    /// Bucket of standalone pages.
    #[serde(default = "defaults::content::pages")]
    #[educe(Default = defaults::content::pages())]
    pub pages: String,

    /// File extension of documents, without the dot.
    #[serde(default = "defaults::content::extension")]
    #[educe(Default = defaults::content::extension())]
    pub extension: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.root, PathBuf::from("./"));
        assert_eq!(config.content.posts, "posts");
        assert_eq!(config.content.pages, "pages");
        assert_eq!(config.content.extension, "md");
    }

    #[test]
    fn test_content_config_custom() {
        let config = r#"
            [content]
            root = "site"
            posts = "articles"
            extension = "markdown"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.content.root, PathBuf::from("site"));
        assert_eq!(config.content.posts, "articles");
        assert_eq!(config.content.pages, "pages");
        assert_eq!(config.content.extension, "markdown");
    }
}
