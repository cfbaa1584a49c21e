//! `[base]` section configuration.
//!
//! Site-level settings shared by every command.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in folio.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "fzxu's Blog"
/// url_prefix = "/blog/post/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Intro line above generated post link lists.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// Path prefix of post URLs; a post lives at `<url_prefix><path_title>/`.
    #[serde(default = "defaults::base::url_prefix")]
    #[educe(Default = defaults::base::url_prefix())]
    pub url_prefix: String,
}
