//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Link list title, post URL prefix               |
//! | `[content]` | Content root, bucket names, document extension |
//! | `[render]`  | Markdown extensions, code language policy      |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "All my posts"
//! url_prefix = "/blog/post/"
//!
//! [content]
//! root = "."
//! posts = "posts"
//! extension = "md"
//!
//! [render]
//! strict_languages = true
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod render;

pub use base::BaseConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use render::RenderConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Project root (set from the CLI)
    #[serde(skip)]
    pub root: Option<PathBuf>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content location
    #[serde(default)]
    pub content: ContentConfig,

    /// Markdown rendering
    #[serde(default)]
    pub render: RenderConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = Some(path.to_path_buf())
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .as_ref()
            .cloned()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.content.root, cli.content.as_ref());

        let root = Self::normalize_path(&root);
        self.set_root(&root);
        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.content.root = Self::normalize_path(&root.join(&self.content.root));
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate field values
    pub fn validate(&self) -> Result<()> {
        for (field, bucket) in [
            ("[content.posts]", &self.content.posts),
            ("[content.pages]", &self.content.pages),
        ] {
            if bucket.is_empty() || bucket.contains(['/', '\\']) {
                bail!(ConfigError::Validation(format!(
                    "{field} must be a non-empty directory name, got `{bucket}`"
                )));
            }
        }

        let extension = &self.content.extension;
        if extension.is_empty() || extension.starts_with('.') {
            bail!(ConfigError::Validation(format!(
                "[content.extension] must be non-empty and without a leading dot, got `{extension}`"
            )));
        }

        let prefix = &self.base.url_prefix;
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            bail!(ConfigError::Validation(format!(
                "[base.url_prefix] must start and end with `/`, got `{prefix}`"
            )));
        }

        Ok(())
    }
}
