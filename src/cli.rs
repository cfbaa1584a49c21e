//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio markdown blog content CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List posts, newest first
    List {
        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Only posts carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Print post metadata as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tags, most used first
    Tags {
        /// Only the K most used tags
        #[arg(long, value_name = "K")]
        top: Option<usize>,
    },

    /// Render a post (or a page) body to HTML
    Render {
        /// Identifier of the document, i.e. its file name without extension
        path_title: String,

        /// Read from the pages bucket instead of posts
        #[arg(long)]
        page: bool,
    },

    /// Print a markdown list linking to every post
    Links,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters() {
        let cli = Cli::try_parse_from(["folio", "-r", "site", "list", "--tag", "rust", "--json"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
        match cli.command {
            Commands::List { category, tag, json } => {
                assert_eq!(category, None);
                assert_eq!(tag.as_deref(), Some("rust"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_render_page() {
        let cli = Cli::try_parse_from(["folio", "-C", "blog.toml", "render", "about", "--page"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("blog.toml"));
        assert!(matches!(
            cli.command,
            Commands::Render { ref path_title, page: true } if path_title == "about"
        ));
    }

    #[test]
    fn test_parse_tags_top() {
        let cli = Cli::try_parse_from(["folio", "tags", "--top", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Tags { top: Some(3) }));
    }

    #[test]
    fn test_missing_command() {
        assert!(Cli::try_parse_from(["folio"]).is_err());
    }
}
