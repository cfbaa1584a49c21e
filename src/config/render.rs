//! `[render]` section configuration.
//!
//! Markdown extensions and the code block language policy.

use super::defaults;
use crate::render::MarkdownOptions;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in folio.toml.
///
/// # Example
/// ```toml
/// [render]
/// strict_languages = false
/// math = false
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    /// Fail when a code block declares a language with no highlighting
    /// definition. When false the block is rendered as plain code.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub strict_languages: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub tables: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub footnotes: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub strikethrough: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub tasklists: bool,

    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub math: bool,
}

impl From<&RenderConfig> for MarkdownOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            tables: config.tables,
            footnotes: config.footnotes,
            strikethrough: config.strikethrough,
            tasklists: config.tasklists,
            math: config.math,
            strict_languages: config.strict_languages,
        }
    }
}
