//! Folio - content pipeline for a markdown blog.
//!
//! Posts are markdown files with a `---` delimited header. The crate parses
//! them into [`post::Post`] records, caches them in a
//! [`repository::PostRepository`], aggregates tags, and renders bodies to
//! HTML with [`render::MarkdownRenderer`].

pub mod cli;
pub mod config;
pub mod error;
pub mod links;
pub mod logger;
pub mod post;
pub mod render;
pub mod repository;
