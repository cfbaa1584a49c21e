//! Folio - inspect and render a markdown blog from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use folio::{
    cli::{Cli, Commands},
    config::SiteConfig,
    links::{PrefixUrlBuilder, gen_post_list_md},
    log,
    post::Post,
    render::{MarkdownOptions, MarkdownRenderer},
    repository::{
        FsContentStore, PostRepository, get_all_tags, get_top_k_tags, posts_with_tag,
        tag_counts,
    },
};
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(cli)?));

    let store = FsContentStore::new(&config.content.root, &config.content.extension);
    let repo = PostRepository::new(store, &config.content.posts);

    match &cli.command {
        Commands::List { category, tag, json } => {
            list_posts(&repo, category.as_deref(), tag.as_deref(), *json)
        }
        Commands::Tags { top } => list_tags(&repo, *top),
        Commands::Render { path_title, page } => render_document(&repo, config, path_title, *page),
        Commands::Links => {
            let titles = repo.path_titles()?;
            let urls = PrefixUrlBuilder::new(&config.base.url_prefix);
            println!("{}", gen_post_list_md(&config.base.title, &titles, &urls));
            Ok(())
        }
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}

fn list_posts(
    repo: &PostRepository<FsContentStore>,
    category: Option<&str>,
    tag: Option<&str>,
    json: bool,
) -> Result<()> {
    let posts = repo.load_all()?;

    let mut selected: Vec<&Post> = match tag {
        Some(tag) => posts_with_tag(&posts, tag),
        None => posts.iter().collect(),
    };
    if let Some(category) = category {
        selected.retain(|post| post.category == category);
    }

    if json {
        let out = serde_json::to_string_pretty(&selected).context("Failed to serialize posts")?;
        println!("{out}");
        return Ok(());
    }

    for post in selected {
        println!("{}  {}  [{}]", post.date, post.path_title, post.tags.join(", "));
    }
    Ok(())
}

fn list_tags(repo: &PostRepository<FsContentStore>, top: Option<usize>) -> Result<()> {
    let posts = repo.load_all()?;
    let counts = tag_counts(&posts);

    let tags: Vec<String> = match top {
        Some(k) => get_top_k_tags(&posts, k),
        None => get_all_tags(&posts).into_iter().collect(),
    };
    for tag in tags {
        let count = counts.get(&tag).copied().unwrap_or(0);
        println!("{tag} ({count})");
    }
    Ok(())
}

fn render_document(
    repo: &PostRepository<FsContentStore>,
    config: &SiteConfig,
    path_title: &str,
    page: bool,
) -> Result<()> {
    let markdown = if page {
        repo.get_content(&config.content.pages, path_title)
            .with_context(|| format!("Failed to read page `{path_title}`"))?
    } else {
        repo.get_post(path_title)
            .with_context(|| format!("Failed to load post `{path_title}`"))?
            .content
    };

    let renderer = MarkdownRenderer::new(MarkdownOptions::from(&config.render));
    let html = renderer
        .render(&markdown)
        .with_context(|| format!("Failed to render `{path_title}`"))?;

    log!("render"; "{path_title}");
    println!("{html}");
    Ok(())
}
